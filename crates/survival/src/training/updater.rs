//! Coordinate descent updates for the linear model.
//!
//! Each coordinate takes a damped Newton step on the penalized loss
//!
//! ```text
//! Σ loss(margin_i) + λ/2 ||w||² + α ||w||₁
//! ```
//!
//! with the bias left unpenalized.

use ndarray::{ArrayView1, ArrayViewMut1};

use super::Gradients;
use crate::repr::LinearModel;

/// Configuration for coordinate descent updates.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateConfig {
    /// L1 regularization strength (alpha).
    pub alpha: f64,
    /// L2 regularization strength (lambda).
    pub lambda: f64,
    /// Step damping applied to each Newton step.
    pub learning_rate: f64,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            lambda: 1.0,
            learning_rate: 0.5,
        }
    }
}

/// Soft-thresholding operator for L1 regularization.
///
/// S(x, t) = sign(x) × max(|x| - t, 0)
#[inline]
pub fn soft_threshold(x: f64, threshold: f64) -> f64 {
    if x > threshold {
        x - threshold
    } else if x < -threshold {
        x + threshold
    } else {
        0.0
    }
}

/// Step for one feature's weight.
///
/// ```text
/// grad_l2 = Σ g_i x_i + λ w
/// hess_l2 = Σ h_i x_i² + λ
/// delta   = soft_threshold(-grad_l2 / hess_l2, α / hess_l2) × learning_rate
/// ```
pub fn compute_weight_update(
    model: &LinearModel,
    feature_values: ArrayView1<'_, f64>,
    gradients: &Gradients,
    feature: usize,
    config: &UpdateConfig,
) -> f64 {
    let current_weight = model.weight(feature);

    let (sum_grad, sum_hess) = feature_values
        .iter()
        .zip(gradients.pairs())
        .fold((0.0, 0.0), |(g, h), (&x, pair)| {
            (g + pair.grad * x, h + pair.hess * x * x)
        });

    let grad_l2 = sum_grad + config.lambda * current_weight;
    let hess_l2 = sum_hess + config.lambda;
    if hess_l2.abs() < 1e-12 {
        return 0.0;
    }

    let raw_update = -grad_l2 / hess_l2;
    let thresholded = soft_threshold(raw_update, config.alpha / hess_l2);
    thresholded * config.learning_rate
}

/// Newton step for the (unpenalized) bias.
pub fn compute_bias_update(gradients: &Gradients, config: &UpdateConfig) -> f64 {
    let (sum_grad, sum_hess) = gradients.sum();
    if sum_hess.abs() < 1e-12 {
        return 0.0;
    }
    -sum_grad / sum_hess * config.learning_rate
}

/// Add `delta * feature_values` to `margins`.
#[inline]
pub fn apply_weight_delta(
    feature_values: ArrayView1<'_, f64>,
    delta: f64,
    mut margins: ArrayViewMut1<'_, f64>,
) {
    margins.scaled_add(delta, &feature_values);
}
