//! Coordinate descent trainer for logistic regression.
//!
//! Each pass updates the bias, then every feature in order, recomputing
//! gradients after each coordinate. Margins are maintained incrementally
//! by applying weight deltas instead of re-predicting.

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::{Error, Result};
use crate::repr::LinearModel;

use super::updater::{apply_weight_delta, compute_bias_update, compute_weight_update, UpdateConfig};
use super::{Gradients, LogisticLoss, TrainingLogger, Verbosity};

/// Updates at or below this magnitude leave margins untouched.
const MIN_APPLIED_DELTA: f64 = 1e-10;

// ============================================================================
// TrainerParams
// ============================================================================

/// What the trainer does when `max_iter` passes finish without converging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConvergencePolicy {
    /// Log a warning and keep the last parameters.
    #[default]
    Warn,
    /// Return [`Error::NotConverged`].
    Fail,
}

/// Parameters for logistic regression training.
#[derive(Debug, Clone)]
pub struct TrainerParams {
    /// Maximum number of full coordinate passes.
    pub max_iter: usize,

    /// Convergence threshold on the largest absolute coordinate step in a
    /// pass (bias included). This is a step-size criterion, not a bound on
    /// the gradient norm: with heavy damping or a flat objective, steps can
    /// fall below `tol` while the gradient is still non-zero.
    pub tol: f64,

    /// Step damping for each Newton update.
    pub learning_rate: f64,

    /// L1 regularization (alpha).
    pub alpha: f64,

    /// L2 regularization (lambda). The bias is never penalized.
    pub lambda: f64,

    pub convergence: ConvergencePolicy,

    pub verbosity: Verbosity,
}

impl Default for TrainerParams {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tol: 1e-4,
            learning_rate: 0.5,
            alpha: 0.0,
            lambda: 1.0,
            convergence: ConvergencePolicy::default(),
            verbosity: Verbosity::default(),
        }
    }
}

impl TrainerParams {
    fn update_config(&self) -> UpdateConfig {
        UpdateConfig {
            alpha: self.alpha,
            lambda: self.lambda,
            learning_rate: self.learning_rate,
        }
    }
}

/// Summary of a finished fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitReport {
    /// Passes actually run.
    pub iterations: usize,
    pub converged: bool,
    /// Largest absolute coordinate step in the final pass. Below `tol`
    /// exactly when `converged` is set.
    pub max_delta: f64,
    /// Mean log loss on the training data at the final parameters.
    pub loss: f64,
}

// ============================================================================
// LogisticRegressionTrainer
// ============================================================================

/// Fits a [`LinearModel`] to 0/1 targets by penalized maximum likelihood.
#[derive(Debug, Clone, Default)]
pub struct LogisticRegressionTrainer {
    params: TrainerParams,
}

impl LogisticRegressionTrainer {
    pub fn new(params: TrainerParams) -> Self {
        Self { params }
    }

    /// Train on `features` (`[n_samples, n_features]`) and `targets` in {0, 1}.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyTable`] when there are no samples
    /// - [`Error::ShapeMismatch`] when row and target counts differ
    /// - [`Error::NotConverged`] under [`ConvergencePolicy::Fail`]
    pub fn train(
        &self,
        features: ArrayView2<'_, f64>,
        targets: ArrayView1<'_, f64>,
    ) -> Result<(LinearModel, FitReport)> {
        let (n_samples, n_features) = features.dim();
        if n_samples == 0 {
            return Err(Error::EmptyTable);
        }
        if targets.len() != n_samples {
            return Err(Error::ShapeMismatch(format!(
                "{} feature rows but {} targets",
                n_samples,
                targets.len()
            )));
        }

        let objective = LogisticLoss;
        let update_config = self.params.update_config();
        let logger = TrainingLogger::new(self.params.verbosity);
        logger.start_training(n_samples, n_features, self.params.max_iter);

        let base_score = objective.compute_base_score(targets);
        let mut model = LinearModel::zeros(n_features);
        model.set_bias(base_score);

        let mut margins = Array1::from_elem(n_samples, base_score);
        let mut gradients = Gradients::new(n_samples);

        let mut iterations = 0;
        let mut max_delta = f64::INFINITY;
        let mut converged = false;

        while iterations < self.params.max_iter {
            iterations += 1;
            max_delta = 0.0_f64;

            objective.compute_gradients_into(margins.view(), targets, &mut gradients);

            let bias_delta = compute_bias_update(&gradients, &update_config);
            max_delta = max_delta.max(bias_delta.abs());
            if bias_delta.abs() > MIN_APPLIED_DELTA {
                model.add_bias(bias_delta);
                margins += bias_delta;
                objective.compute_gradients_into(margins.view(), targets, &mut gradients);
            }

            for feature in 0..n_features {
                let column = features.column(feature);
                let delta =
                    compute_weight_update(&model, column, &gradients, feature, &update_config);
                max_delta = max_delta.max(delta.abs());
                if delta.abs() <= MIN_APPLIED_DELTA {
                    continue;
                }

                model.add_weight(feature, delta);
                apply_weight_delta(column, delta, margins.view_mut());
                objective.compute_gradients_into(margins.view(), targets, &mut gradients);
            }

            logger.log_iteration(iterations, max_delta, || {
                objective.loss_sum(margins.view(), targets) / n_samples as f64
            });

            if max_delta < self.params.tol {
                converged = true;
                break;
            }
        }

        let loss = objective.loss_sum(margins.view(), targets) / n_samples as f64;

        if !converged {
            match self.params.convergence {
                ConvergencePolicy::Fail => {
                    return Err(Error::NotConverged {
                        iterations,
                        max_delta,
                    })
                }
                ConvergencePolicy::Warn => {
                    logger.log_not_converged(self.params.max_iter, max_delta)
                }
            }
        }
        logger.finish_training(iterations, converged, loss);

        let report = FitReport {
            iterations,
            converged,
            max_delta,
            loss,
        };
        Ok((model, report))
    }
}

// ============================================================================
// Tests
// ============================================================================
