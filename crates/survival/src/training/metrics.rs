//! Classification metrics.
//!
//! The model is trained on log loss but reported by accuracy.

/// Fraction of positions where `predictions` equals `labels`.
///
/// Returns 0.0 for empty input.
pub fn accuracy(labels: &[u8], predictions: &[u8]) -> f64 {
    debug_assert_eq!(labels.len(), predictions.len());
    if labels.is_empty() {
        return 0.0;
    }
    let correct = labels
        .iter()
        .zip(predictions)
        .filter(|(l, p)| l == p)
        .count();
    correct as f64 / labels.len() as f64
}
