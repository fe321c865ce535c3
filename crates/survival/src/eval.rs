//! Evaluation of predictions against an optional label column.

use crate::data::{Column, ColumnData, Table};
use crate::error::{Error, Result};
use crate::training::accuracy;

/// Number of leading predictions reported for an unlabeled table.
pub const PREVIEW_LEN: usize = 10;

/// What could be measured for a set of predictions.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalOutcome {
    /// The table carried labels.
    Labeled { accuracy: f64 },
    /// No labels: share of positive predictions and the first few labels.
    Unlabeled { positive_rate: f64, head: Vec<u8> },
}

impl EvalOutcome {
    pub fn accuracy(&self) -> Option<f64> {
        match self {
            Self::Labeled { accuracy } => Some(*accuracy),
            Self::Unlabeled { .. } => None,
        }
    }
}

/// Read a 0/1 label column.
///
/// Numeric cells must be exactly 0 or 1 and text cells must read as `0` or
/// `1`; anything else, including a missing cell, is [`Error::InvalidLabel`].
pub fn parse_labels(column: &Column) -> Result<Vec<u8>> {
    let invalid = |row: usize| Error::InvalidLabel {
        column: column.name().to_string(),
        row,
        value: column.display(row),
    };
    match column.data() {
        ColumnData::Numeric(values) => values
            .iter()
            .enumerate()
            .map(|(row, value)| match value {
                Some(v) if *v == 0.0 => Ok(0),
                Some(v) if *v == 1.0 => Ok(1),
                _ => Err(invalid(row)),
            })
            .collect(),
        ColumnData::Text(values) => values
            .iter()
            .enumerate()
            .map(|(row, value)| match value.as_deref() {
                Some("0") => Ok(0),
                Some("1") => Ok(1),
                _ => Err(invalid(row)),
            })
            .collect(),
    }
}

/// Scores predictions against the target column when a table has one.
#[derive(Debug, Clone)]
pub struct Evaluator {
    target: String,
}

impl Evaluator {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Accuracy when `table` has the target column, otherwise the positive
    /// rate and the first [`PREVIEW_LEN`] predictions.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLabel`] for a non-binary label, [`Error::ShapeMismatch`]
    /// when the prediction count differs from the row count. The unlabeled
    /// path never fails.
    pub fn evaluate(&self, table: &Table, predictions: &[u8]) -> Result<EvalOutcome> {
        let Some(column) = table.column(&self.target) else {
            return Ok(Self::unlabeled(predictions));
        };
        let labels = parse_labels(column)?;
        if labels.len() != predictions.len() {
            return Err(Error::ShapeMismatch(format!(
                "{} labels but {} predictions",
                labels.len(),
                predictions.len()
            )));
        }
        Ok(EvalOutcome::Labeled {
            accuracy: accuracy(&labels, predictions),
        })
    }

    fn unlabeled(predictions: &[u8]) -> EvalOutcome {
        let positives = predictions.iter().filter(|&&p| p == 1).count();
        let positive_rate = if predictions.is_empty() {
            0.0
        } else {
            positives as f64 / predictions.len() as f64
        };
        EvalOutcome::Unlabeled {
            positive_rate,
            head: predictions.iter().take(PREVIEW_LEN).copied().collect(),
        }
    }
}
