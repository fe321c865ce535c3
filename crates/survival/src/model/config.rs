//! Logistic regression configuration with builder pattern.
//!
//! [`LogisticRegressionConfig`] uses the `bon` crate for builder generation
//! and validates every field at build time.
//!
//! # Example
//!
//! ```
//! use survival::model::{ConvergencePolicy, LogisticRegressionConfig};
//!
//! // All defaults
//! let config = LogisticRegressionConfig::builder().build().unwrap();
//! assert_eq!(config.max_iter, 1000);
//!
//! // Stricter fit that refuses to return an unconverged model
//! let config = LogisticRegressionConfig::builder()
//!     .lambda(0.1)
//!     .max_iter(5000)
//!     .convergence(ConvergencePolicy::Fail)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.convergence, ConvergencePolicy::Fail);
//! ```

use bon::Builder;

use crate::training::{ConvergencePolicy, TrainerParams, Verbosity};

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("learning_rate must be in (0, 1], got {0}")]
    InvalidLearningRate(f64),

    #[error("max_iter must be at least 1")]
    InvalidMaxIter,

    #[error("tol must be positive, got {0}")]
    InvalidTolerance(f64),

    #[error("threshold must be in [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("{field} must be non-negative, got {value}")]
    InvalidRegularization { field: &'static str, value: f64 },
}

// =============================================================================
// LogisticRegressionConfig
// =============================================================================

/// Configuration for fitting a [`LogisticRegressionModel`](super::LogisticRegressionModel).
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct LogisticRegressionConfig {
    // === Regularization ===
    /// L2 penalty on the coefficients. Default: 1.0.
    #[builder(default = 1.0)]
    pub lambda: f64,

    /// L1 penalty on the coefficients. Default: 0.0.
    #[builder(default = 0.0)]
    pub alpha: f64,

    // === Optimizer ===
    /// Newton step damping. Default: 0.5.
    #[builder(default = 0.5)]
    pub learning_rate: f64,

    /// Maximum coordinate descent passes. Default: 1000.
    #[builder(default = 1000)]
    pub max_iter: usize,

    /// Stop once the largest coordinate step in a pass is below this.
    /// Default: 1e-4.
    #[builder(default = 1e-4)]
    pub tol: f64,

    /// Behavior when `max_iter` is reached first. Default: `Warn`.
    #[builder(default)]
    pub convergence: ConvergencePolicy,

    // === Prediction ===
    /// Probability at or above which a row is labeled 1. Default: 0.5.
    #[builder(default = 0.5)]
    pub threshold: f64,

    // === Logging ===
    /// Trainer verbosity. Default: `Warning`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl<S: logistic_regression_config_builder::IsComplete> LogisticRegressionConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is out of range.
    pub fn build(self) -> Result<LogisticRegressionConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl LogisticRegressionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(ConfigError::InvalidLearningRate(self.learning_rate));
        }
        if self.max_iter == 0 {
            return Err(ConfigError::InvalidMaxIter);
        }
        if !(self.tol > 0.0) {
            return Err(ConfigError::InvalidTolerance(self.tol));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        for (field, value) in [("lambda", self.lambda), ("alpha", self.alpha)] {
            if !(value >= 0.0) {
                return Err(ConfigError::InvalidRegularization { field, value });
            }
        }
        Ok(())
    }

    /// Trainer parameters for this configuration.
    pub fn to_trainer_params(&self) -> TrainerParams {
        TrainerParams {
            max_iter: self.max_iter,
            tol: self.tol,
            learning_rate: self.learning_rate,
            alpha: self.alpha,
            lambda: self.lambda,
            convergence: self.convergence,
            verbosity: self.verbosity,
        }
    }
}

impl Default for LogisticRegressionConfig {
    fn default() -> Self {
        Self {
            lambda: 1.0,
            alpha: 0.0,
            learning_rate: 0.5,
            max_iter: 1000,
            tol: 1e-4,
            convergence: ConvergencePolicy::default(),
            threshold: 0.5,
            verbosity: Verbosity::default(),
        }
    }
}
