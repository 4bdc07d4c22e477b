//! Built-in model functions for common fitting problems.
//!
//! These are plain fn items, so they can be handed anywhere a
//! [`ModelFn`](crate::ModelFn) or [`FixedParamModelFn`](crate::FixedParamModelFn)
//! is expected. Parameter layouts are documented per function; the functions
//! index into the parameter vector directly and expect the caller to supply
//! at least as many entries as the layout names.

use ndarray::Array1;

/// Linear model: `f(t) = p[0] + p[1] * t`.
pub fn linear(t: f64, params: &Array1<f64>) -> f64 {
    params[0] + params[1] * t
}

/// Polynomial model over all supplied coefficients:
/// `f(t) = p[0] + p[1]*t + p[2]*t^2 + ...`
pub fn polynomial(t: f64, params: &Array1<f64>) -> f64 {
    let mut y = 0.0;
    let mut t_power = 1.0;
    for &c in params.iter() {
        y += c * t_power;
        t_power *= t;
    }
    y
}

/// Exponential decay with baseline:
/// `f(t) = p[0] * exp(-t / p[1]) + p[2]`.
pub fn exp_decay(t: f64, params: &Array1<f64>) -> f64 {
    params[0] * (-t / params[1]).exp() + params[2]
}

/// Gaussian peak: `f(t) = p[0] * exp(-(t - p[1])^2 / (2 * p[2]^2))`,
/// with amplitude `p[0]`, center `p[1]`, and width `p[2]`.
pub fn gaussian(t: f64, params: &Array1<f64>) -> f64 {
    let arg = (t - params[1]) / params[2];
    params[0] * (-0.5 * arg * arg).exp()
}

/// Amplitude-only Gaussian with the peak shape held fixed:
/// `f(t) = p[0] * exp(-(t - fixed[0])^2 / (2 * fixed[1]^2))`.
///
/// Center and width live in the auxiliary vector, so a fitting session can
/// optimize the amplitude alone against a known line shape.
pub fn gaussian_fixed_shape(t: f64, params: &Array1<f64>, fixed: &Array1<f64>) -> f64 {
    let arg = (t - fixed[0]) / fixed[1];
    params[0] * (-0.5 * arg * arg).exp()
}
