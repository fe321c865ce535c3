//! Logistic regression classifier.
//!
//! Wraps a trained [`LinearModel`] with its [`FitReport`] and the decision
//! threshold used for hard labels.

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::{Error, Result};
use crate::repr::LinearModel;
use crate::training::{FitReport, LogisticLoss, LogisticRegressionTrainer};

use super::LogisticRegressionConfig;

/// A fitted binary logistic regression.
#[derive(Debug, Clone)]
pub struct LogisticRegressionModel {
    linear: LinearModel,
    report: FitReport,
    threshold: f64,
}

impl LogisticRegressionModel {
    /// Fit on `features` (`[n_samples, n_features]`) and 0/1 `labels`.
    ///
    /// # Errors
    ///
    /// Propagates trainer errors ([`Error::EmptyTable`], [`Error::ShapeMismatch`],
    /// [`Error::NotConverged`]).
    pub fn fit(
        features: ArrayView2<'_, f64>,
        labels: &[u8],
        config: &LogisticRegressionConfig,
    ) -> Result<Self> {
        let targets: Array1<f64> = labels.iter().map(|&y| f64::from(y)).collect();
        let trainer = LogisticRegressionTrainer::new(config.to_trainer_params());
        let (linear, report) = trainer.train(features, targets.view())?;
        Ok(Self {
            linear,
            report,
            threshold: config.threshold,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Coefficients in feature-column order (bias excluded).
    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.linear.coefficients()
    }

    pub fn bias(&self) -> f64 {
        self.linear.bias()
    }

    pub fn fit_report(&self) -> &FitReport {
        &self.report
    }

    pub fn n_features(&self) -> usize {
        self.linear.n_features()
    }

    // =========================================================================
    // Prediction
    // =========================================================================

    fn check_width(&self, features: ArrayView2<'_, f64>) -> Result<()> {
        if features.ncols() != self.n_features() {
            return Err(Error::ShapeMismatch(format!(
                "model expects {} features, got {}",
                self.n_features(),
                features.ncols()
            )));
        }
        Ok(())
    }

    /// Positive-class probability for each row.
    pub fn predict_proba(&self, features: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        self.check_width(features)?;
        let mut output = self.linear.predict_margins(features);
        match output.as_slice_mut() {
            Some(slice) => LogisticLoss.transform_predictions(slice),
            None => output.mapv_inplace(crate::training::sigmoid),
        }
        Ok(output)
    }

    /// Hard 0/1 labels: 1 where the probability reaches the threshold.
    pub fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Vec<u8>> {
        let proba = self.predict_proba(features)?;
        Ok(proba
            .iter()
            .map(|&p| u8::from(p >= self.threshold))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConvergencePolicy;
    use ndarray::{array, Array2};

    fn fitted() -> LogisticRegressionModel {
        let features = array![[1.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 1.0], [1.0, 0.0]];
        let labels = [1, 1, 0, 0, 0];
        let config = LogisticRegressionConfig::builder().lambda(0.01).build().unwrap();
        LogisticRegressionModel::fit(features.view(), &labels, &config).unwrap()
    }

    #[test]
    fn probabilities_are_in_unit_interval() {
        let model = fitted();
        let test = array![[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]];
        let proba = model.predict_proba(test.view()).unwrap();
        assert_eq!(proba.len(), 3);
        assert!(proba.iter().all(|&p| (0.0..=1.0).contains(&p)));
        assert!(proba[0] > proba[1]);
    }

    #[test]
    fn predict_thresholds_probabilities() {
        let model = fitted();
        let test = array![[1.0, 0.0], [0.0, 1.0]];
        let labels = model.predict(test.view()).unwrap();
        assert_eq!(labels, vec![1, 0]);
        assert_eq!(model.coefficients().len(), 2);
        assert!(model.fit_report().iterations >= 1);
    }

    #[test]
    fn wrong_width_is_rejected() {
        let model = fitted();
        let test = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            model.predict(test.view()),
            Err(Error::ShapeMismatch(_))
        ));
    }

    #[test]
    fn fail_policy_surfaces_not_converged() {
        let features = array![[0.0], [1.0], [2.0]];
        let config = LogisticRegressionConfig::builder()
            .max_iter(1)
            .convergence(ConvergencePolicy::Fail)
            .build()
            .unwrap();
        let err = LogisticRegressionModel::fit(features.view(), &[0, 1, 1], &config).unwrap_err();
        assert!(matches!(err, Error::NotConverged { .. }));
    }
}
