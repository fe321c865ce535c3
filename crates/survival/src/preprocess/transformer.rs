//! Side-by-side composition of the numeric and categorical transforms.

use ndarray::{s, Array2};

use super::{FittedEncoder, FittedImputer, MedianImputer, OneHotEncoder};
use crate::config::FeatureSpec;
use crate::data::Table;
use crate::error::{Error, Result};

/// Unfitted preprocessor: which columns get imputed and which get encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturePreprocessor {
    numeric: Vec<String>,
    categorical: Vec<String>,
}

impl FeaturePreprocessor {
    /// Preprocessor for the feature columns of `spec`.
    pub fn from_spec(spec: &FeatureSpec) -> Self {
        Self {
            numeric: spec.numeric.clone(),
            categorical: spec.categorical.clone(),
        }
    }

    /// All input columns, numeric first.
    pub fn input_columns(&self) -> Vec<&str> {
        self.numeric
            .iter()
            .chain(&self.categorical)
            .map(String::as_str)
            .collect()
    }

    /// Learn medians and vocabularies from `table`.
    pub fn fit(&self, table: &Table) -> Result<FittedPreprocessor> {
        if table.n_rows() == 0 {
            return Err(Error::EmptyTable);
        }
        table.require_columns("training data", &self.input_columns())?;

        let imputers = self
            .numeric
            .iter()
            .map(|name| MedianImputer.fit(table.require_column("training data", name)?))
            .collect::<Result<Vec<_>>>()?;
        let encoders = self
            .categorical
            .iter()
            .map(|name| OneHotEncoder.fit(table.require_column("training data", name)?))
            .collect::<Result<Vec<_>>>()?;

        Ok(FittedPreprocessor { imputers, encoders })
    }
}

/// Learned preprocessing state.
///
/// Output layout is `[imputed numeric columns..., one-hot blocks...]`, in the
/// order the columns were configured.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedPreprocessor {
    imputers: Vec<FittedImputer>,
    encoders: Vec<FittedEncoder>,
}

impl FittedPreprocessor {
    /// Training median for a numeric column.
    pub fn median(&self, column: &str) -> Option<f64> {
        self.imputers
            .iter()
            .find(|i| i.column() == column)
            .map(FittedImputer::median)
    }

    /// Frozen vocabulary for a categorical column.
    pub fn vocabulary(&self, column: &str) -> Option<&[String]> {
        self.encoders
            .iter()
            .find(|e| e.column() == column)
            .map(FittedEncoder::categories)
    }

    /// Width of the derived feature vector.
    pub fn n_outputs(&self) -> usize {
        self.imputers.len() + self.encoders.iter().map(FittedEncoder::n_outputs).sum::<usize>()
    }

    /// Names of the derived features, in output order.
    pub fn feature_names(&self) -> Vec<String> {
        self.imputers
            .iter()
            .map(|i| i.column().to_string())
            .chain(self.encoders.iter().flat_map(FittedEncoder::feature_names))
            .collect()
    }

    /// Build the `[n_rows, n_outputs]` feature matrix for `table`.
    pub fn transform(&self, table: &Table) -> Result<Array2<f64>> {
        let columns: Vec<&str> = self
            .imputers
            .iter()
            .map(FittedImputer::column)
            .chain(self.encoders.iter().map(FittedEncoder::column))
            .collect();
        table.require_columns("input table", &columns)?;

        let mut features = Array2::<f64>::zeros((table.n_rows(), self.n_outputs()));
        let mut offset = 0;

        for imputer in &self.imputers {
            let column = table.require_column("input table", imputer.column())?;
            imputer.transform_into(column, features.column_mut(offset))?;
            offset += 1;
        }
        for encoder in &self.encoders {
            let column = table.require_column("input table", encoder.column())?;
            let width = encoder.n_outputs();
            encoder.transform_into(column, features.slice_mut(s![.., offset..offset + width]));
            offset += width;
        }

        debug_assert_eq!(offset, self.n_outputs());
        Ok(features)
    }
}

// =============================================================================
// Tests
// =============================================================================
