//! Crate-wide error type.

use std::io;
use std::path::PathBuf;

use crate::model::ConfigError;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while loading, fitting, evaluating or writing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{name} not found at {}", path.display())]
    MissingFile { name: String, path: PathBuf },

    #[error("{table} is missing required columns: {columns:?}")]
    MissingColumns { table: String, columns: Vec<String> },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("column {column} has type {got}, expected {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
        got: &'static str,
    },

    #[error("column {0} has no values to learn from")]
    EmptyColumn(String),

    #[error("invalid label in column {column} at row {row}: {value:?}")]
    InvalidLabel {
        column: String,
        row: usize,
        value: String,
    },

    #[error("cannot fit on an empty table")]
    EmptyTable,

    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("optimizer did not converge within {iterations} iterations (last max update {max_delta:.3e})")]
    NotConverged { iterations: usize, max_delta: f64 },

    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("invalid model configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
