//! High-level model API.
//!
//! - [`LogisticRegressionConfig`]: validated training configuration (`bon` builder)
//! - [`LogisticRegressionModel`]: fitted classifier with probability and label prediction

mod classifier;
mod config;

pub use classifier::LogisticRegressionModel;
pub use config::{ConfigError, LogisticRegressionConfig};
pub use crate::training::ConvergencePolicy;
