//! Residual evaluation for a Levenberg-Marquardt minimizer.
//!
//! The minimizer repeatedly hands a candidate parameter vector to the
//! evaluator and receives the vector of observed-minus-predicted residuals
//! it attempts to drive toward zero. The evaluator is a pure callback: all
//! state lives in the caller-owned dataset and the minimizer's own loop.

use crate::dataset::FitData;
use crate::error::{LmEvalError, Result};
use ndarray::Array1;

/// Status signal returned to the minimizer after each evaluation.
///
/// `Abort` requests early termination of the minimization. No evaluation
/// path in this crate produces it unless a caller-supplied [`DriftGuard`]
/// decides to; the default is always `Continue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalStatus {
    /// Keep iterating.
    #[default]
    Continue,
    /// Stop the minimization.
    Abort,
}

impl EvalStatus {
    /// Whether this status requests early termination.
    pub fn is_abort(&self) -> bool {
        matches!(self, EvalStatus::Abort)
    }
}

/// Policy hook inspecting each freshly computed residual vector.
///
/// This is the extension point for aborting a run when the parameters drift
/// out of a valid domain. Implemented for closures of the matching shape.
pub trait DriftGuard {
    /// Decide whether the minimization should continue.
    fn check(&self, params: &Array1<f64>, residuals: &Array1<f64>) -> EvalStatus;
}

impl<F> DriftGuard for F
where
    F: Fn(&Array1<f64>, &Array1<f64>) -> EvalStatus,
{
    fn check(&self, params: &Array1<f64>, residuals: &Array1<f64>) -> EvalStatus {
        self(params, residuals)
    }
}

/// The default guard: never aborts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDriftGuard;

impl DriftGuard for NoDriftGuard {
    fn check(&self, _params: &Array1<f64>, _residuals: &Array1<f64>) -> EvalStatus {
        EvalStatus::Continue
    }
}

/// Computes residual vectors for candidate parameter vectors.
///
/// The evaluator serves both dataset variants through the [`FitData`] trait;
/// passing a [`FixedParamDataset`](crate::FixedParamDataset) is what selects
/// the fixed-auxiliary-parameter evaluation form.
///
/// Model-function output is not inspected: a model that produces a
/// non-finite value for some input passes that value through to the
/// minimizer unmodified.
#[derive(Debug, Clone, Copy)]
pub struct ResidualEvaluator<G: DriftGuard = NoDriftGuard> {
    guard: G,
}

impl ResidualEvaluator<NoDriftGuard> {
    /// Create an evaluator with the default (never-abort) policy.
    pub fn new() -> Self {
        Self { guard: NoDriftGuard }
    }
}

impl Default for ResidualEvaluator<NoDriftGuard> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: DriftGuard> ResidualEvaluator<G> {
    /// Install a drift-detection policy, replacing the current one.
    pub fn with_guard<H: DriftGuard>(self, guard: H) -> ResidualEvaluator<H> {
        ResidualEvaluator { guard }
    }

    /// Evaluate the residuals at the given parameters.
    ///
    /// Writes `fvec[i] = y[i] - model(t[i], params)` for every index of
    /// `fvec`, then consults the installed guard.
    ///
    /// # Arguments
    ///
    /// * `params` - The candidate parameter vector (read-only)
    /// * `data` - The dataset to fit against
    /// * `fvec` - The residual buffer, overwritten in full
    ///
    /// # Returns
    ///
    /// * The guard's status (`Continue` unless a policy decides otherwise),
    ///   or `DimensionMismatch` if `fvec` does not match the dataset size
    pub fn evaluate<D: FitData>(
        &self,
        params: &Array1<f64>,
        data: &D,
        fvec: &mut Array1<f64>,
    ) -> Result<EvalStatus> {
        if fvec.len() != data.len() {
            return Err(LmEvalError::DimensionMismatch(format!(
                "residual buffer has {} entries, dataset has {} observations",
                fvec.len(),
                data.len()
            )));
        }

        let t = data.independent();
        let y = data.observed();
        for i in 0..data.len() {
            fvec[i] = y[i] - data.predict(t[i], params);
        }

        Ok(self.guard.check(params, fvec))
    }
}

/// Evaluate residuals with the default (never-abort) policy.
///
/// Convenience form suitable for handing to a minimizer directly as its
/// evaluate callback.
pub fn evaluate_residuals<D: FitData>(
    params: &Array1<f64>,
    data: &D,
    fvec: &mut Array1<f64>,
) -> Result<EvalStatus> {
    ResidualEvaluator::new().evaluate(params, data, fvec)
}
