//! Median imputation for numeric columns.

use ndarray::ArrayViewMut1;

use crate::data::Column;
use crate::error::{Error, Result};

/// Median of the present values, `None` if there are none.
///
/// For an even count the two middle values are averaged.
pub fn median(values: &[Option<f64>]) -> Option<f64> {
    let mut present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    present.sort_by(f64::total_cmp);

    let mid = present.len() / 2;
    if present.len() % 2 == 0 {
        Some((present[mid - 1] + present[mid]) / 2.0)
    } else {
        Some(present[mid])
    }
}

/// Learns the median of a numeric column.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianImputer;

impl MedianImputer {
    /// Compute the median of `column`.
    ///
    /// Fails for text columns and for columns without any present value.
    pub fn fit(&self, column: &Column) -> Result<FittedImputer> {
        let values = column.expect_numeric()?;
        let median = median(values).ok_or_else(|| Error::EmptyColumn(column.name().to_string()))?;
        Ok(FittedImputer {
            column: column.name().to_string(),
            median,
        })
    }
}

/// A numeric column's training median.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedImputer {
    column: String,
    median: f64,
}

impl FittedImputer {
    /// Name of the column this imputer was fitted on.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The median learned at fit time.
    pub fn median(&self) -> f64 {
        self.median
    }

    /// Copy `column` into `out`, replacing missing cells with the stored median.
    pub fn transform_into(&self, column: &Column, mut out: ArrayViewMut1<'_, f64>) -> Result<()> {
        let values = column.expect_numeric()?;
        debug_assert_eq!(values.len(), out.len());
        for (dst, value) in out.iter_mut().zip(values) {
            *dst = value.unwrap_or(self.median);
        }
        Ok(())
    }

    /// Imputed copy of `column`.
    pub fn transform(&self, column: &Column) -> Result<Vec<f64>> {
        let values = column.expect_numeric()?;
        Ok(values.iter().map(|v| v.unwrap_or(self.median)).collect())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn median_odd_even_and_empty() {
        assert_eq!(median(&[Some(20.0), Some(30.0), None, Some(40.0)]), Some(30.0));
        assert_eq!(median(&[Some(4.0), Some(1.0), Some(3.0), Some(2.0)]), Some(2.5));
        assert_eq!(median(&[None, None]), None);
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn fit_learns_training_median() {
        let train = Column::from_cells("Age", &["20", "30", "", "40"]);
        let imputer = MedianImputer.fit(&train).unwrap();
        assert_eq!(imputer.column(), "Age");
        assert_abs_diff_eq!(imputer.median(), 30.0);
    }

    #[test]
    fn transform_reuses_training_median() {
        let train = Column::from_cells("Age", &["20", "30", "", "40"]);
        let imputer = MedianImputer.fit(&train).unwrap();

        // The evaluation column's own median would be 80.
        let test = Column::from_cells("Age", &["", "70", "80", "90"]);
        let filled = imputer.transform(&test).unwrap();
        assert_eq!(filled, vec![30.0, 70.0, 80.0, 90.0]);
    }

    #[test]
    fn fit_rejects_text_and_empty_columns() {
        let text = Column::from_cells("Age", &["old", "young"]);
        assert!(matches!(MedianImputer.fit(&text), Err(Error::ColumnType { .. })));

        let empty = Column::from_cells("Age", &["", ""]);
        assert!(matches!(MedianImputer.fit(&empty), Err(Error::EmptyColumn(c)) if c == "Age"));
    }
}
