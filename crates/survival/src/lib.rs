//! survival: passenger survival prediction over tabular CSV data.
//!
//! A single linear pipeline: load a table, impute and encode the selected
//! features, fit a logistic regression, evaluate it, predict the held-out
//! set and optionally write a submission file.
//!
//! # Key Types
//!
//! - [`Table`] - In-memory CSV table with inferred column types
//! - [`FeaturePreprocessor`] / [`FittedPreprocessor`] - Median imputation + one-hot encoding
//! - [`LogisticRegressionConfig`] / [`LogisticRegressionModel`] - Classifier
//! - [`SurvivalPipeline`] / [`FittedPipeline`] - Preprocessor and model fitted together
//! - [`RunConfig`] - Where the data lives; read from `DATA_DIR`
//!
//! # Running
//!
//! [`run`] executes the whole sequence for a [`RunConfig`] and returns a
//! [`RunSummary`]. The `survival` binary wraps it with logging and an exit code.

pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod model;
pub mod pipeline;
pub mod preprocess;
pub mod repr;
pub mod run;
pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use config::{FeatureSpec, RunConfig};
pub use data::{Column, ColumnType, Table};
pub use error::{Error, Result};
pub use eval::{EvalOutcome, Evaluator};
pub use model::{ConvergencePolicy, LogisticRegressionConfig, LogisticRegressionModel};
pub use pipeline::{FittedPipeline, SurvivalPipeline};
pub use preprocess::{FeaturePreprocessor, FittedPreprocessor};
pub use run::{run, run_with_model, RunSummary};
pub use training::Verbosity;
