//! Run configuration.
//!
//! [`RunConfig`] says where the CSV files live and which columns feed the
//! model. It is an explicit value handed to [`run`](crate::run), so tests can
//! point the pipeline at any directory. [`RunConfig::from_env`] layers the
//! `DATA_DIR` environment variable over the defaults via `figment`.

use std::path::PathBuf;

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Data directory used when `DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "src/data";

/// Environment variable overriding [`RunConfig::data_dir`].
pub const DATA_DIR_ENV: &str = "DATA_DIR";

// =============================================================================
// FeatureSpec
// =============================================================================

/// Column names used by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSpec {
    /// Numeric features, imputed with the training median.
    pub numeric: Vec<String>,
    /// Categorical features, one-hot encoded over the training vocabulary.
    pub categorical: Vec<String>,
    /// Binary label column (0/1).
    pub target: String,
    /// Identifier column keying the prediction file.
    pub id: String,
}

impl Default for FeatureSpec {
    fn default() -> Self {
        Self {
            numeric: vec!["Age".to_string()],
            categorical: vec!["Sex".to_string()],
            target: "Survived".to_string(),
            id: "PassengerId".to_string(),
        }
    }
}

impl FeatureSpec {
    /// All feature columns, categorical first (the order they are logged in).
    pub fn feature_columns(&self) -> Vec<&str> {
        self.categorical
            .iter()
            .chain(self.numeric.iter())
            .map(String::as_str)
            .collect()
    }
}

// =============================================================================
// RunConfig
// =============================================================================

/// Where to find the input files and where to write predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Directory containing the CSV files.
    pub data_dir: PathBuf,
    /// Training file name, relative to `data_dir`.
    pub train_file: String,
    /// Evaluation file name, relative to `data_dir`.
    pub test_file: String,
    /// Prediction file name, relative to `data_dir`.
    pub output_file: String,
    /// Feature, target and identifier columns.
    pub features: FeatureSpec,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            train_file: "train.csv".to_string(),
            test_file: "test.csv".to_string(),
            output_file: "submission.csv".to_string(),
            features: FeatureSpec::default(),
        }
    }
}

impl RunConfig {
    /// Default configuration rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// The layered configuration sources: defaults, then `DATA_DIR`.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(RunConfig::default()))
            .merge(Env::raw().only(&[DATA_DIR_ENV]))
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::figment().extract()?)
    }

    pub fn train_path(&self) -> PathBuf {
        self.data_dir.join(&self.train_file)
    }

    pub fn test_path(&self) -> PathBuf {
        self.data_dir.join(&self.test_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output_file)
    }
}

// =============================================================================
// Tests
// =============================================================================
