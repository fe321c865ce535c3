//! Preprocessor and classifier fitted as one unit.
//!
//! [`SurvivalPipeline::fit`] learns imputation medians and category
//! vocabularies from the training table, encodes it, and fits the logistic
//! regression on the result. The returned [`FittedPipeline`] applies exactly
//! those learned parameters to any later table.

use crate::config::FeatureSpec;
use crate::data::Table;
use crate::error::Result;
use crate::eval::parse_labels;
use crate::model::{LogisticRegressionConfig, LogisticRegressionModel};
use crate::preprocess::{FeaturePreprocessor, FittedPreprocessor};

/// Unfitted pipeline.
#[derive(Debug, Clone)]
pub struct SurvivalPipeline {
    preprocessor: FeaturePreprocessor,
    config: LogisticRegressionConfig,
    target: String,
}

impl SurvivalPipeline {
    pub fn new(
        preprocessor: FeaturePreprocessor,
        config: LogisticRegressionConfig,
        target: impl Into<String>,
    ) -> Self {
        Self {
            preprocessor,
            config,
            target: target.into(),
        }
    }

    /// Pipeline over the columns named in `spec`.
    pub fn from_spec(spec: &FeatureSpec, config: LogisticRegressionConfig) -> Self {
        Self::new(FeaturePreprocessor::from_spec(spec), config, spec.target.clone())
    }

    /// Fit preprocessing and model on a labeled table.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyTable`](crate::Error::EmptyTable) for a table without rows
    /// - [`Error::MissingColumns`](crate::Error::MissingColumns) when a feature or the target is absent
    /// - [`Error::InvalidLabel`](crate::Error::InvalidLabel) for a target that is not 0/1
    /// - any error from imputation, encoding or training
    pub fn fit(self, table: &Table) -> Result<FittedPipeline> {
        let preprocessor = self.preprocessor.fit(table)?;
        let labels = parse_labels(table.require_column("training data", &self.target)?)?;
        let features = preprocessor.transform(table)?;
        let model = LogisticRegressionModel::fit(features.view(), &labels, &self.config)?;
        Ok(FittedPipeline {
            preprocessor,
            model,
        })
    }
}

/// Fitted preprocessing plus classifier.
#[derive(Debug, Clone)]
pub struct FittedPipeline {
    preprocessor: FittedPreprocessor,
    model: LogisticRegressionModel,
}

impl FittedPipeline {
    pub fn preprocessor(&self) -> &FittedPreprocessor {
        &self.preprocessor
    }

    pub fn model(&self) -> &LogisticRegressionModel {
        &self.model
    }

    /// Hard 0/1 label for each row of `table`, in row order.
    pub fn predict(&self, table: &Table) -> Result<Vec<u8>> {
        let features = self.preprocessor.transform(table)?;
        self.model.predict(features.view())
    }

    /// Derived feature names paired with their coefficients.
    ///
    /// `None` when the names do not line up with the coefficient vector.
    pub fn coefficient_table(&self) -> Option<Vec<(String, f64)>> {
        let names = self.preprocessor.feature_names();
        let coefficients = self.model.coefficients();
        if names.len() != coefficients.len() {
            return None;
        }
        Some(names.into_iter().zip(coefficients.iter().copied()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Column;
    use crate::error::Error;

    fn train_table() -> Table {
        Table::from_columns(vec![
            Column::from_cells("PassengerId", &["1", "2", "3", "4"]),
            Column::from_cells("Survived", &["0", "1", "1", "0"]),
            Column::from_cells("Sex", &["male", "female", "female", "male"]),
            Column::from_cells("Age", &["22", "38", "", "35"]),
        ])
        .unwrap()
    }

    fn pipeline() -> SurvivalPipeline {
        SurvivalPipeline::from_spec(&FeatureSpec::default(), LogisticRegressionConfig::default())
    }

    #[test]
    fn fit_learns_preprocessing_state() {
        let fitted = pipeline().fit(&train_table()).unwrap();
        assert_eq!(fitted.preprocessor().median("Age"), Some(35.0));
        assert_eq!(
            fitted.preprocessor().vocabulary("Sex"),
            Some(&["female".to_string(), "male".to_string()][..])
        );
    }

    #[test]
    fn coefficient_table_names_every_column() {
        let fitted = pipeline().fit(&train_table()).unwrap();
        let table = fitted.coefficient_table().unwrap();
        let names: Vec<&str> = table.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Age", "Sex_female", "Sex_male"]);
    }

    #[test]
    fn predictions_follow_row_order() {
        let fitted = pipeline().fit(&train_table()).unwrap();
        let labels = fitted.predict(&train_table()).unwrap();
        assert_eq!(labels.len(), 4);
        assert!(labels.iter().all(|&l| l <= 1));
        assert_eq!(labels[1], labels[2], "same sex, imputed age close to median");
    }

    #[test]
    fn missing_target_is_reported() {
        let table = Table::from_columns(vec![
            Column::from_cells("Sex", &["male", "female"]),
            Column::from_cells("Age", &["22", "38"]),
        ])
        .unwrap();
        let err = pipeline().fit(&table).unwrap_err();
        match err {
            Error::MissingColumns { columns, .. } => assert_eq!(columns, vec!["Survived"]),
            other => panic!("unexpected error: {other}"),
        }
    }
}
