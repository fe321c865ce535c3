//! Property tests for the fitted preprocessing state.

use ndarray::Array2;
use proptest::prelude::*;
use survival::data::Column;
use survival::preprocess::{median, MedianImputer, OneHotEncoder};

fn ages() -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(prop::option::weighted(0.8, 0.0f64..100.0), 1..40)
        .prop_filter("at least one present value", |v| v.iter().any(Option::is_some))
}

proptest! {
    #[test]
    fn imputed_column_has_no_gaps(values in ages()) {
        let column = Column::numeric("Age", values.clone());
        let fitted = MedianImputer.fit(&column).unwrap();
        let filled = fitted.transform(&column).unwrap();

        prop_assert_eq!(filled.len(), values.len());
        for (original, filled) in values.iter().zip(&filled) {
            match original {
                Some(v) => prop_assert_eq!(v, filled),
                None => prop_assert_eq!(*filled, fitted.median()),
            }
        }
    }

    #[test]
    fn median_ignores_order(mut values in ages()) {
        let forward = median(&values);
        values.reverse();
        prop_assert_eq!(forward, median(&values));
    }

    #[test]
    fn median_lies_within_present_range(values in ages()) {
        let m = median(&values).unwrap();
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        let lo = present.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(lo <= m && m <= hi);
    }

    #[test]
    fn one_hot_rows_have_at_most_one_indicator(
        train in prop::collection::vec("[abc]", 1..20),
        eval in prop::collection::vec("[abcd]?", 0..20),
    ) {
        let encoder = OneHotEncoder.fit(&Column::from_cells("Sex", &train)).unwrap();
        let column = Column::from_cells("Sex", &eval);
        let mut block = Array2::<f64>::zeros((eval.len(), encoder.n_outputs()));
        encoder.transform_into(&column, block.view_mut());

        for (row, cell) in block.rows().into_iter().zip(&eval) {
            let total: f64 = row.sum();
            let expected = if encoder.slot(cell).is_some() { 1.0 } else { 0.0 };
            prop_assert_eq!(total, expected);
        }
    }
}
