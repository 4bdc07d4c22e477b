//! Integration tests for the residual-evaluation callback.

use approx::assert_relative_eq;
use lmeval_rs::{
    evaluate_residuals, models, Dataset, EvalStatus, FixedParamDataset, LmEvalError,
    ResidualEvaluator,
};
use ndarray::{array, Array1};

/// The worked linear example: y = 1 + t over t = 0, 1, 2.
fn linear_data() -> Dataset<fn(f64, &Array1<f64>) -> f64> {
    Dataset::new(
        array![0.0, 1.0, 2.0],
        array![1.0, 2.0, 3.0],
        models::linear as fn(f64, &Array1<f64>) -> f64,
    )
    .unwrap()
}

#[test]
fn exact_parameters_give_zero_residuals() {
    let data = linear_data();
    let params = array![1.0, 1.0];
    let mut fvec = Array1::zeros(3);

    let status = evaluate_residuals(&params, &data, &mut fvec).unwrap();

    assert_eq!(status, EvalStatus::Continue);
    for r in fvec.iter() {
        assert_relative_eq!(*r, 0.0);
    }
}

#[test]
fn zero_parameters_leave_observations() {
    let data = linear_data();
    let params = array![0.0, 0.0];
    let mut fvec = Array1::zeros(3);

    evaluate_residuals(&params, &data, &mut fvec).unwrap();

    assert_eq!(fvec, array![1.0, 2.0, 3.0]);
}

#[test]
fn residual_identity_holds_pointwise() {
    let t = Array1::linspace(0.0, 4.0, 9);
    let y = t.mapv(|t| 2.0 * (-t / 1.5f64).exp() + 0.25 + 0.01 * t.sin());
    let data = Dataset::new(t.clone(), y.clone(), models::exp_decay).unwrap();

    let params = array![2.0, 1.5, 0.25];
    let mut fvec = Array1::zeros(9);
    evaluate_residuals(&params, &data, &mut fvec).unwrap();

    for i in 0..t.len() {
        let expected = y[i] - models::exp_decay(t[i], &params);
        assert_relative_eq!(fvec[i], expected);
    }
}

#[test]
fn fixed_parameters_reach_the_model_unchanged() {
    let t = Array1::linspace(-2.0, 2.0, 11);
    let shape = array![0.5, 0.8];
    let y = t.mapv(|t| models::gaussian(t, &array![3.0, 0.5, 0.8]));
    let data =
        FixedParamDataset::new(t.clone(), y.clone(), shape, models::gaussian_fixed_shape).unwrap();

    let snapshot = data.fixed().clone();
    let params = array![3.0];
    let mut fvec = Array1::zeros(11);
    let status = evaluate_residuals(&params, &data, &mut fvec).unwrap();

    assert_eq!(status, EvalStatus::Continue);
    for r in fvec.iter() {
        assert_relative_eq!(*r, 0.0, epsilon = 1e-12);
    }
    // the auxiliary vector is read-only for the whole run
    assert_eq!(data.fixed(), &snapshot);

    // and the amplitude-only residuals match the free-form model pointwise
    let wrong = array![1.0];
    evaluate_residuals(&wrong, &data, &mut fvec).unwrap();
    for i in 0..t.len() {
        let expected = y[i] - models::gaussian(t[i], &array![1.0, 0.5, 0.8]);
        assert_relative_eq!(fvec[i], expected, epsilon = 1e-12);
    }
}

#[test]
fn status_defaults_to_continue_without_a_policy() {
    let data = linear_data();
    let mut fvec = Array1::zeros(3);

    for params in [array![1.0, 1.0], array![1e8, -1e8], array![f64::NAN, 0.0]] {
        let status = evaluate_residuals(&params, &data, &mut fvec).unwrap();
        assert_eq!(status, EvalStatus::Continue);
    }
}

#[test]
fn drift_guard_requests_abort() {
    let data = linear_data();
    let evaluator =
        ResidualEvaluator::new().with_guard(|params: &Array1<f64>, _fvec: &Array1<f64>| {
            if params.iter().any(|p| !p.is_finite() || p.abs() > 1e6) {
                EvalStatus::Abort
            } else {
                EvalStatus::Continue
            }
        });

    let mut fvec = Array1::zeros(3);
    assert_eq!(
        evaluator
            .evaluate(&array![1.0, 1.0], &data, &mut fvec)
            .unwrap(),
        EvalStatus::Continue
    );
    assert!(evaluator
        .evaluate(&array![1e9, 1.0], &data, &mut fvec)
        .unwrap()
        .is_abort());
}

#[test]
fn mismatched_residual_buffer_is_an_error() {
    let data = linear_data();
    let params = array![1.0, 1.0];

    for len in [0, 2, 4] {
        let mut fvec = Array1::zeros(len);
        match evaluate_residuals(&params, &data, &mut fvec) {
            Err(LmEvalError::DimensionMismatch(_)) => (),
            other => panic!("expected DimensionMismatch, got {:?}", other.map(|_| ())),
        }
    }
}

#[test]
fn empty_dataset_is_a_no_op() {
    let data = Dataset::new(Array1::zeros(0), Array1::zeros(0), models::linear).unwrap();
    let params = array![1.0, 1.0];
    let mut fvec = Array1::zeros(0);

    let status = evaluate_residuals(&params, &data, &mut fvec).unwrap();

    assert_eq!(status, EvalStatus::Continue);
    assert!(fvec.is_empty());
}

#[test]
fn evaluator_is_reusable_across_candidates() {
    // the shape of a minimizer loop: one evaluator, many candidate vectors
    let data = linear_data();
    let evaluator = ResidualEvaluator::new();
    let mut fvec = Array1::zeros(3);

    let mut n_eval = 0;
    for step in 0..5 {
        let params = array![1.0, 1.0 + 0.1 * step as f64];
        evaluator.evaluate(&params, &data, &mut fvec).unwrap();
        n_eval += 1;

        assert_relative_eq!(fvec[0], 0.0);
        assert_relative_eq!(fvec[2], -0.2 * step as f64);
    }
    assert_eq!(n_eval, 5);
}
