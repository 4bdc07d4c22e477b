//! Dataset types and the model-function capability traits.
//!
//! This module defines the data a fit operates on: the independent-variable
//! and observed-value sequences together with the user's model function.
//! Two dataset variants exist. `Dataset` pairs the data with a plain model
//! function; `FixedParamDataset` additionally carries a read-only auxiliary
//! parameter vector that is handed to the model on every prediction, for
//! model families where part of the parameter set is held fixed across a
//! fitting session while only the rest is optimized. The variant is chosen
//! at construction time; the evaluator and reporters are generic over the
//! `FitData` trait that both implement, so the choice is resolved at compile
//! time.

use crate::error::{LmEvalError, Result};
use ndarray::Array1;

/// A model function evaluated at a single point given the parameter vector.
///
/// This is the capability the basic dataset is polymorphic over. A blanket
/// implementation covers plain closures and fn items, so
/// `|t, p: &Array1<f64>| p[0] + p[1] * t` qualifies directly.
pub trait ModelFn {
    /// Evaluate the model at `t` with the given parameters.
    fn eval(&self, t: f64, params: &Array1<f64>) -> f64;
}

impl<F> ModelFn for F
where
    F: Fn(f64, &Array1<f64>) -> f64,
{
    #[inline]
    fn eval(&self, t: f64, params: &Array1<f64>) -> f64 {
        self(t, params)
    }
}

/// A model function that additionally receives a fixed auxiliary parameter
/// vector on every call.
///
/// The auxiliary vector is owned by the dataset and treated as constant for
/// the duration of a fit; only `params` is varied by the minimizer.
pub trait FixedParamModelFn {
    /// Evaluate the model at `t` with the varied parameters and the fixed
    /// auxiliary parameters.
    fn eval(&self, t: f64, params: &Array1<f64>, fixed: &Array1<f64>) -> f64;
}

impl<F> FixedParamModelFn for F
where
    F: Fn(f64, &Array1<f64>, &Array1<f64>) -> f64,
{
    #[inline]
    fn eval(&self, t: f64, params: &Array1<f64>, fixed: &Array1<f64>) -> f64 {
        self(t, params, fixed)
    }
}

/// Read-only view of a fitting dataset, as seen by the residual evaluator
/// and the progress reporters.
///
/// Both `Dataset` and `FixedParamDataset` implement this trait, so code that
/// is generic over `FitData` serves both variants without any runtime
/// dispatch or casting.
pub trait FitData {
    /// Number of data points (equals the residual-vector length).
    fn len(&self) -> usize;

    /// Whether the dataset contains no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The independent-variable values.
    fn independent(&self) -> &Array1<f64>;

    /// The observed values.
    fn observed(&self) -> &Array1<f64>;

    /// Evaluate the model prediction at `t` for the given parameters.
    fn predict(&self, t: f64, params: &Array1<f64>) -> f64;
}

/// A basic fitting dataset: (t, y) data plus the model function.
///
/// The dataset is immutable once constructed; the evaluator and reporters
/// only borrow it. Construction fails if the independent and observed
/// sequences differ in length.
pub struct Dataset<F: ModelFn> {
    t: Array1<f64>,
    y: Array1<f64>,
    model: F,
}

impl<F: ModelFn> Dataset<F> {
    /// Create a new dataset from data sequences and a model function.
    ///
    /// # Arguments
    ///
    /// * `t` - The independent-variable values
    /// * `y` - The observed values, one per entry of `t`
    /// * `model` - The model function `f(t, params) -> predicted`
    ///
    /// # Returns
    ///
    /// * The dataset, or `DimensionMismatch` if `t` and `y` differ in length
    pub fn new(t: Array1<f64>, y: Array1<f64>, model: F) -> Result<Self> {
        if t.len() != y.len() {
            return Err(LmEvalError::DimensionMismatch(format!(
                "independent sequence has {} entries, observed sequence has {}",
                t.len(),
                y.len()
            )));
        }

        Ok(Self { t, y, model })
    }
}

impl<F: ModelFn> FitData for Dataset<F> {
    fn len(&self) -> usize {
        self.t.len()
    }

    fn independent(&self) -> &Array1<f64> {
        &self.t
    }

    fn observed(&self) -> &Array1<f64> {
        &self.y
    }

    fn predict(&self, t: f64, params: &Array1<f64>) -> f64 {
        self.model.eval(t, params)
    }
}

/// A fitting dataset whose model receives an extra fixed parameter vector.
///
/// The auxiliary vector is owned here and threaded to the model function on
/// every prediction, never mutated. Selecting this type at construction time
/// is what selects the fixed-parameter evaluation form; there is no runtime
/// switch.
pub struct FixedParamDataset<F: FixedParamModelFn> {
    t: Array1<f64>,
    y: Array1<f64>,
    fixed: Array1<f64>,
    model: F,
}

impl<F: FixedParamModelFn> FixedParamDataset<F> {
    /// Create a new dataset with a fixed auxiliary parameter vector.
    ///
    /// # Arguments
    ///
    /// * `t` - The independent-variable values
    /// * `y` - The observed values, one per entry of `t`
    /// * `fixed` - Auxiliary parameters held constant during the fit
    /// * `model` - The model function `f(t, params, fixed) -> predicted`
    ///
    /// # Returns
    ///
    /// * The dataset, or `DimensionMismatch` if `t` and `y` differ in length
    pub fn new(t: Array1<f64>, y: Array1<f64>, fixed: Array1<f64>, model: F) -> Result<Self> {
        if t.len() != y.len() {
            return Err(LmEvalError::DimensionMismatch(format!(
                "independent sequence has {} entries, observed sequence has {}",
                t.len(),
                y.len()
            )));
        }

        Ok(Self { t, y, fixed, model })
    }

    /// The auxiliary parameters held constant during the fit.
    pub fn fixed(&self) -> &Array1<f64> {
        &self.fixed
    }
}

impl<F: FixedParamModelFn> FitData for FixedParamDataset<F> {
    fn len(&self) -> usize {
        self.t.len()
    }

    fn independent(&self) -> &Array1<f64> {
        &self.t
    }

    fn observed(&self) -> &Array1<f64> {
        &self.y
    }

    fn predict(&self, t: f64, params: &Array1<f64>) -> f64 {
        self.model.eval(t, params, &self.fixed)
    }
}
