//! Logistic objective.

use ndarray::ArrayView1;

use super::Gradients;

/// Numerically stable logistic function.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Logistic loss (log loss / binary cross-entropy) for binary classification.
///
/// Expects labels in {0, 1} and margins in log-odds.
/// - Loss: `-y*log(σ(m)) - (1-y)*log(1-σ(m))`
/// - Gradient: `σ(m) - y`
/// - Hessian: `σ(m) * (1 - σ(m))`, floored at [`LogisticLoss::HESS_MIN`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LogisticLoss;

impl LogisticLoss {
    pub const HESS_MIN: f64 = 1e-6;

    /// Fill `gradients` for the current `margins`.
    pub fn compute_gradients_into(
        &self,
        margins: ArrayView1<'_, f64>,
        targets: ArrayView1<'_, f64>,
        gradients: &mut Gradients,
    ) {
        debug_assert_eq!(margins.len(), targets.len());
        debug_assert_eq!(margins.len(), gradients.n_samples());

        for ((pair, &m), &y) in gradients
            .pairs_mut()
            .iter_mut()
            .zip(margins.iter())
            .zip(targets.iter())
        {
            let p = sigmoid(m);
            pair.grad = p - y;
            pair.hess = (p * (1.0 - p)).max(Self::HESS_MIN);
        }
    }

    /// Log-odds of the mean label: the best constant margin.
    pub fn compute_base_score(&self, targets: ArrayView1<'_, f64>) -> f64 {
        if targets.is_empty() {
            return 0.0;
        }
        let p = (targets.sum() / targets.len() as f64).clamp(1e-7, 1.0 - 1e-7);
        (p / (1.0 - p)).ln()
    }

    /// Sum of per-sample losses for `margins`.
    pub fn loss_sum(&self, margins: ArrayView1<'_, f64>, targets: ArrayView1<'_, f64>) -> f64 {
        margins
            .iter()
            .zip(targets.iter())
            // log(1 + e^m) - y*m, written to avoid overflow for large |m|
            .map(|(&m, &y)| m.max(0.0) + (-m.abs()).exp().ln_1p() - y * m)
            .sum()
    }

    /// Map margins to probabilities in place.
    pub fn transform_predictions(&self, margins: &mut [f64]) {
        for m in margins.iter_mut() {
            *m = sigmoid(*m);
        }
    }
}
