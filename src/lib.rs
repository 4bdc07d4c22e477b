//! # lmeval-rs
//!
//! `lmeval-rs` implements the two extension points a Levenberg-Marquardt
//! minimizer exposes to its embedding application: the residual-evaluation
//! callback and the progress-reporting callback. The minimization algorithm
//! itself (iteration, Jacobian estimation, step control, convergence) is an
//! external collaborator that calls into this crate.
//!
//! The library provides:
//! - Dataset types pairing (t, y) data with a user model function, including
//!   a variant that threads a fixed auxiliary-parameter vector to the model
//! - A residual evaluator producing observed-minus-predicted vectors, with a
//!   pluggable early-termination policy
//! - Progress reporters for the minimizer's status hooks: the classic
//!   human-readable printout, a JSON-lines stream, and a silent default
//!
//! ## Basic Usage
//!
//! ```
//! use lmeval_rs::{evaluate_residuals, models, Dataset, EvalStatus};
//! use ndarray::{array, Array1};
//!
//! let data = Dataset::new(
//!     array![0.0, 1.0, 2.0],
//!     array![1.0, 2.0, 3.0],
//!     models::linear,
//! )?;
//!
//! let params = array![1.0, 1.0];
//! let mut fvec = Array1::zeros(3);
//! let status = evaluate_residuals(&params, &data, &mut fvec)?;
//!
//! assert_eq!(status, EvalStatus::Continue);
//! assert_eq!(fvec, array![0.0, 0.0, 0.0]);
//! # Ok::<(), lmeval_rs::LmEvalError>(())
//! ```

// Public modules
pub mod error;

pub mod dataset;

pub mod evaluate;

pub mod report;

pub mod models;

// Re-exports for convenience
pub use error::{LmEvalError, Result};

pub use dataset::{Dataset, FitData, FixedParamDataset, FixedParamModelFn, ModelFn};

pub use evaluate::{
    evaluate_residuals, DriftGuard, EvalStatus, NoDriftGuard, ResidualEvaluator,
};

pub use report::{
    euclidean_norm, JsonLinesReporter, NormFn, Phase, ProgressReporter, ProgressState,
    SilentReporter, VerboseReporter,
};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
