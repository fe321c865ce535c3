//! One-hot encoding for categorical columns.

use std::collections::BTreeSet;

use ndarray::ArrayViewMut2;

use crate::data::Column;
use crate::error::{Error, Result};

/// Learns the category vocabulary of a column.
///
/// Categories are the cells' text form, so numeric columns (e.g. a passenger
/// class of `1`, `2`, `3`) can be encoded too.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneHotEncoder;

impl OneHotEncoder {
    /// Collect the sorted set of present categories in `column`.
    pub fn fit(&self, column: &Column) -> Result<FittedEncoder> {
        let categories: BTreeSet<String> =
            (0..column.len()).filter_map(|row| column.value_str(row)).collect();
        if categories.is_empty() {
            return Err(Error::EmptyColumn(column.name().to_string()));
        }
        Ok(FittedEncoder {
            column: column.name().to_string(),
            categories: categories.into_iter().collect(),
        })
    }
}

/// A frozen, sorted category vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FittedEncoder {
    column: String,
    categories: Vec<String>,
}

impl FittedEncoder {
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Vocabulary in slot order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Width of the indicator block.
    pub fn n_outputs(&self) -> usize {
        self.categories.len()
    }

    /// Slot of `category`, `None` if it was not seen at fit time.
    pub fn slot(&self, category: &str) -> Option<usize> {
        self.categories
            .binary_search_by(|c| c.as_str().cmp(category))
            .ok()
    }

    /// Output names, `<column>_<category>`.
    pub fn feature_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|c| format!("{}_{}", self.column, c))
            .collect()
    }

    /// Write indicators for `column` into `block` (`[n_rows, n_outputs]`).
    ///
    /// Unknown and missing categories leave their row all zero.
    pub fn transform_into(&self, column: &Column, mut block: ArrayViewMut2<'_, f64>) {
        debug_assert_eq!(block.ncols(), self.n_outputs());
        debug_assert_eq!(block.nrows(), column.len());
        block.fill(0.0);
        for row in 0..column.len() {
            if let Some(slot) = column.value_str(row).as_deref().and_then(|c| self.slot(c)) {
                block[[row, slot]] = 1.0;
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn vocabulary_is_sorted_and_deduplicated() {
        let col = Column::from_cells("Sex", &["male", "female", "male", ""]);
        let encoder = OneHotEncoder.fit(&col).unwrap();
        assert_eq!(encoder.categories(), &["female".to_string(), "male".to_string()]);
        assert_eq!(encoder.feature_names(), vec!["Sex_female", "Sex_male"]);
    }

    #[test]
    fn unknown_category_encodes_to_zeros() {
        let train = Column::from_cells("Sex", &["male", "female"]);
        let encoder = OneHotEncoder.fit(&train).unwrap();

        let test = Column::from_cells("Sex", &["female", "other", "", "male"]);
        let mut block = Array2::<f64>::from_elem((4, 2), 9.0);
        encoder.transform_into(&test, block.view_mut());

        assert_eq!(block, array![[1.0, 0.0], [0.0, 0.0], [0.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    fn integer_categories_use_plain_form() {
        let col = Column::from_cells("Pclass", &["3", "1", "2", "3"]);
        let encoder = OneHotEncoder.fit(&col).unwrap();
        assert_eq!(encoder.feature_names(), vec!["Pclass_1", "Pclass_2", "Pclass_3"]);
        assert_eq!(encoder.slot("3"), Some(2));
        assert_eq!(encoder.slot("3.0"), None);
    }

    #[test]
    fn empty_vocabulary_is_an_error() {
        let col = Column::from_cells("Sex", &["", "NA"]);
        assert!(matches!(OneHotEncoder.fit(&col), Err(Error::EmptyColumn(_))));
    }
}
