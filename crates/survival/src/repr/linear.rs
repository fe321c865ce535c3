//! Linear model data structure.

use ndarray::{s, Array1, ArrayView1, ArrayView2};

/// Linear scoring model (weights + bias).
///
/// The parameters are stored as an `Array1<f64>` of length `n_features + 1`:
///
/// ```text
/// weights[feature]    → coefficient
/// weights[n_features] → bias (last slot)
/// ```
///
/// so the margin of a row is `x · weights[..n] + weights[n]`.
///
/// # Example
///
/// ```
/// use survival::repr::LinearModel;
/// use ndarray::array;
///
/// let mut model = LinearModel::zeros(2);
/// model.add_weight(0, 0.5);
/// model.add_weight(1, -1.0);
/// model.set_bias(0.25);
/// assert_eq!(model.n_features(), 2);
/// assert_eq!(model.predict_margins(array![[2.0, 1.0]].view()), array![0.25]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    /// Coefficients followed by the bias.
    weights: Array1<f64>,
}

impl LinearModel {
    /// Zero-initialized model.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            weights: Array1::zeros(n_features + 1),
        }
    }

    /// Number of input features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.len() - 1
    }

    #[inline]
    pub fn weight(&self, feature: usize) -> f64 {
        self.weights[feature]
    }

    #[inline]
    pub fn bias(&self) -> f64 {
        self.weights[self.n_features()]
    }

    /// Coefficients without the bias.
    #[inline]
    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.weights.slice(s![..self.n_features()])
    }

    #[inline]
    pub fn set_bias(&mut self, value: f64) {
        let n = self.n_features();
        self.weights[n] = value;
    }

    #[inline]
    pub fn add_weight(&mut self, feature: usize, delta: f64) {
        self.weights[feature] += delta;
    }

    #[inline]
    pub fn add_bias(&mut self, delta: f64) {
        let n = self.n_features();
        self.weights[n] += delta;
    }

    /// Margins (log-odds) of every row of `features` (`[n_samples, n_features]`).
    pub fn predict_margins(&self, features: ArrayView2<'_, f64>) -> Array1<f64> {
        debug_assert_eq!(features.ncols(), self.n_features());
        features.dot(&self.coefficients()) + self.bias()
    }
}
