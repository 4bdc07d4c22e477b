//! Drives the evaluation and reporting hooks through the call sequence a
//! Levenberg-Marquardt loop would issue, without embedding a minimizer.
//!
//! Run with: cargo run --example fit_session

use lmeval_rs::{
    models, Dataset, FitData, Phase, ProgressReporter, ProgressState, ResidualEvaluator,
    VerboseReporter,
};
use ndarray::{array, Array1};

fn main() -> lmeval_rs::Result<()> {
    // Synthetic exponential-decay data: y = 2.5 * exp(-t / 3) + 0.5
    let t = Array1::linspace(0.0, 10.0, 21);
    let y = t.mapv(|t| 2.5 * (-t / 3.0f64).exp() + 0.5);
    let data = Dataset::new(t, y, models::exp_decay)?;

    let evaluator = ResidualEvaluator::new();
    let mut reporter = VerboseReporter::stdout();
    let mut fvec = Array1::zeros(data.len());
    let mut n_eval = 0;

    // A scripted walk toward the true parameters, standing in for the
    // candidates a real minimizer would propose.
    let candidates = [
        array![1.0, 1.0, 0.0],
        array![2.0, 2.0, 0.3],
        array![2.4, 2.8, 0.45],
        array![2.5, 3.0, 0.5],
    ];

    let mut params = candidates[0].clone();
    evaluator.evaluate(&params, &data, &mut fvec)?;
    n_eval += 1;
    reporter.report(
        &ProgressState::new(Phase::Init, &params, &fvec, 0, n_eval),
        &data,
    )?;

    for (iteration, candidate) in candidates.iter().enumerate().skip(1) {
        evaluator.evaluate(&params, &data, &mut fvec)?;
        n_eval += 1;
        reporter.report(
            &ProgressState::new(Phase::GradientIteration, &params, &fvec, iteration, n_eval),
            &data,
        )?;

        evaluator.evaluate(candidate, &data, &mut fvec)?;
        n_eval += 1;
        reporter.report(
            &ProgressState::new(Phase::TrialStep, candidate, &fvec, iteration, n_eval),
            &data,
        )?;

        params = candidate.clone();
    }

    evaluator.evaluate(&params, &data, &mut fvec)?;
    n_eval += 1;
    reporter.report(
        &ProgressState::new(Phase::Terminated, &params, &fvec, candidates.len(), n_eval),
        &data,
    )?;

    Ok(())
}
