//! Progress reporting for a Levenberg-Marquardt minimizer.
//!
//! The minimizer periodically hands its current state to a reporter: the
//! phase it is in, the candidate parameter vector, the latest residual
//! vector, and its loop counters. Reporters are decoupled from any specific
//! output sink, so the classic human-readable printout, a machine-readable
//! stream, or silence can be swapped without touching the evaluation logic.

use crate::dataset::FitData;
use crate::error::Result;
use ndarray::Array1;
use serde::Serialize;
use std::io::{self, Write};

/// Phase of the minimization loop, as reported by the minimizer.
///
/// The sequence over a run is `Init`, then `GradientIteration` and
/// `TrialStep` interleaved, then a final `Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Start of the minimization.
    Init,
    /// An outer iteration determining the gradient.
    GradientIteration,
    /// A trial step in the gradient direction is being evaluated.
    TrialStep,
    /// The minimization has finished.
    Terminated,
}

impl Phase {
    /// Map a C-style minimizer flag (0 init, 1 outer loop, 2 inner loop,
    /// -1 terminated) to a phase.
    pub fn from_flag(flag: i32) -> Option<Phase> {
        match flag {
            0 => Some(Phase::Init),
            1 => Some(Phase::GradientIteration),
            2 => Some(Phase::TrialStep),
            -1 => Some(Phase::Terminated),
            _ => None,
        }
    }

    /// The C-style minimizer flag for this phase.
    pub fn as_flag(&self) -> i32 {
        match self {
            Phase::Init => 0,
            Phase::GradientIteration => 1,
            Phase::TrialStep => 2,
            Phase::Terminated => -1,
        }
    }
}

/// Borrowed snapshot of the minimizer's state at a reporting point.
#[derive(Debug, Clone, Copy)]
pub struct ProgressState<'a> {
    /// Current phase of the loop.
    pub phase: Phase,
    /// Current parameter vector.
    pub params: &'a Array1<f64>,
    /// Latest residual vector.
    pub residuals: &'a Array1<f64>,
    /// Outer-iteration counter.
    pub iteration: usize,
    /// Cumulative number of evaluate calls.
    pub n_eval: usize,
}

impl<'a> ProgressState<'a> {
    /// Bundle the minimizer's state for a reporting call.
    pub fn new(
        phase: Phase,
        params: &'a Array1<f64>,
        residuals: &'a Array1<f64>,
        iteration: usize,
        n_eval: usize,
    ) -> Self {
        Self {
            phase,
            params,
            residuals,
            iteration,
            n_eval,
        }
    }
}

/// A norm function over a residual vector.
///
/// The verbose and JSON reporters call this for their summary value. The
/// default is [`euclidean_norm`]; a minimizer that carries its own
/// overflow-guarded helper can inject it instead.
pub type NormFn = fn(&Array1<f64>) -> f64;

/// Plain Euclidean norm, `sqrt(v . v)`.
pub fn euclidean_norm(v: &Array1<f64>) -> f64 {
    v.dot(v).sqrt()
}

/// Receives minimizer state at each reporting point.
///
/// Reporters take `&mut self` so implementations may buffer between calls.
pub trait ProgressReporter {
    /// Report the given state against the dataset being fit.
    fn report<D: FitData>(&mut self, state: &ProgressState<'_>, data: &D) -> Result<()>;
}

/// The classic human-readable status printout, generalized over the sink.
///
/// Per call this emits a phase-specific line, then unconditionally the
/// current parameter vector and the residual norm. At termination it
/// additionally prints one line per data point with the independent value,
/// the observed value, the model prediction recomputed at the final
/// parameters, and their difference.
pub struct VerboseReporter<W: Write = io::Stdout> {
    out: W,
    norm: NormFn,
}

impl VerboseReporter<io::Stdout> {
    /// Report to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> VerboseReporter<W> {
    /// Report into the given sink.
    pub fn new(out: W) -> Self {
        Self {
            out,
            norm: euclidean_norm,
        }
    }

    /// Replace the norm function used for the summary line.
    pub fn with_norm(mut self, norm: NormFn) -> Self {
        self.norm = norm;
        self
    }

    /// Consume the reporter and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressReporter for VerboseReporter<W> {
    fn report<D: FitData>(&mut self, state: &ProgressState<'_>, data: &D) -> Result<()> {
        match state.phase {
            Phase::Init => writeln!(self.out, "starting minimization")?,
            Phase::GradientIteration => writeln!(
                self.out,
                "determining gradient (iteration {})",
                state.iteration
            )?,
            Phase::TrialStep => writeln!(self.out, "trying step in gradient direction")?,
            Phase::Terminated => {
                writeln!(self.out, "terminated after {} evaluations", state.n_eval)?
            }
        }

        write!(self.out, "  par:")?;
        for p in state.params.iter() {
            write!(self.out, " {:12.6e}", p)?;
        }
        writeln!(self.out, " => norm: {:12.6e}", (self.norm)(state.residuals))?;

        if state.phase == Phase::Terminated {
            writeln!(self.out, "  fitting data as follows:")?;
            let t = data.independent();
            let y = data.observed();
            for i in 0..data.len() {
                let f = data.predict(t[i], state.params);
                writeln!(
                    self.out,
                    "    t[{:2}]={:12.6e} y={:12.6e} fit={:12.6e} residue={:12.6e}",
                    i,
                    t[i],
                    y[i],
                    f,
                    y[i] - f
                )?;
            }
        }

        Ok(())
    }
}

/// A reporter that produces no output and has no side effects.
///
/// The default policy object for the reporting capability; use it when the
/// minimizer's hooks should fire without any textual output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn report<D: FitData>(&mut self, _state: &ProgressState<'_>, _data: &D) -> Result<()> {
        Ok(())
    }
}

#[derive(Serialize)]
struct FitPoint {
    t: f64,
    y: f64,
    fit: f64,
    residue: f64,
}

#[derive(Serialize)]
struct ProgressRecord {
    phase: Phase,
    iteration: usize,
    n_eval: usize,
    params: Vec<f64>,
    norm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<Vec<FitPoint>>,
}

/// Machine-readable progress output, one JSON object per reporting call.
///
/// Carries the same information as [`VerboseReporter`]: phase, counters,
/// parameters, and norm on every call, plus the recomputed per-point fit
/// table at termination.
pub struct JsonLinesReporter<W: Write> {
    out: W,
    norm: NormFn,
}

impl<W: Write> JsonLinesReporter<W> {
    /// Report into the given sink.
    pub fn new(out: W) -> Self {
        Self {
            out,
            norm: euclidean_norm,
        }
    }

    /// Replace the norm function used for the summary value.
    pub fn with_norm(mut self, norm: NormFn) -> Self {
        self.norm = norm;
        self
    }

    /// Consume the reporter and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressReporter for JsonLinesReporter<W> {
    fn report<D: FitData>(&mut self, state: &ProgressState<'_>, data: &D) -> Result<()> {
        let points = if state.phase == Phase::Terminated {
            let t = data.independent();
            let y = data.observed();
            let mut points = Vec::with_capacity(data.len());
            for i in 0..data.len() {
                let fit = data.predict(t[i], state.params);
                points.push(FitPoint {
                    t: t[i],
                    y: y[i],
                    fit,
                    residue: y[i] - fit,
                });
            }
            Some(points)
        } else {
            None
        };

        let record = ProgressRecord {
            phase: state.phase,
            iteration: state.iteration,
            n_eval: state.n_eval,
            params: state.params.to_vec(),
            norm: (self.norm)(state.residuals),
            points,
        };

        serde_json::to_writer(&mut self.out, &record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}
