//! Column extraction for pair tests.

use insight_common::{any_to_bool, for_each_value, numeric_column_f64};
use insight_model::{InsightError, Result, Scalar};
use polars::prelude::DataFrame;

/// Fails with [`InsightError::ColumnNotFound`] unless `df` has `column`.
pub fn require_column(df: &DataFrame, column: &str) -> Result<()> {
    if df.get_column_names().iter().any(|name| name.as_str() == column) {
        Ok(())
    } else {
        Err(InsightError::ColumnNotFound {
            column: column.to_string(),
        })
    }
}

/// Column values as scalars, nulls kept as `None`.
pub fn scalar_column(df: &DataFrame, column: &str) -> Result<Vec<Option<Scalar>>> {
    require_column(df, column)?;
    let mut values = Vec::with_capacity(df.height());
    for_each_value(df, column, |_, value| values.push(Scalar::from_any(value)))?;
    Ok(values)
}

/// Sorted distinct non-null values of a column.
pub fn unique_scalars(df: &DataFrame, column: &str) -> Result<Vec<Scalar>> {
    let mut values: Vec<Scalar> = scalar_column(df, column)?.into_iter().flatten().collect();
    values.sort();
    values.dedup();
    Ok(values)
}

/// Binary membership per row: `Some(true)` for the positive group,
/// `Some(false)` for the negative group, `None` for nulls and anything
/// outside {true, false, 0, 1}.
pub fn binary_column(df: &DataFrame, column: &str) -> Result<Vec<Option<bool>>> {
    require_column(df, column)?;
    let mut values = Vec::with_capacity(df.height());
    for_each_value(df, column, |_, value| values.push(any_to_bool(value)))?;
    Ok(values)
}

/// Column values as floats; nulls, NaN and non-numeric text become `None`.
pub fn float_column(df: &DataFrame, column: &str) -> Result<Vec<Option<f64>>> {
    require_column(df, column)?;
    Ok(numeric_column_f64(df, column)?)
}

/// Rows where both columns hold a number.
pub fn paired_floats(df: &DataFrame, first: &str, second: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let left = float_column(df, first)?;
    let right = float_column(df, second)?;
    Ok(left
        .into_iter()
        .zip(right)
        .filter_map(|pair| match pair {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        })
        .unzip())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("active".into(), vec![Some(true), Some(false), None, Some(true)]).into_column(),
            Series::new("flag".into(), vec![Some(1i64), Some(0), Some(1), Some(2)]).into_column(),
            Series::new("x".into(), vec![Some(1.0), None, Some(3.0), Some(4.0)]).into_column(),
            Series::new("y".into(), vec![Some(2.0), Some(5.0), None, Some(8.0)]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let err = float_column(&frame(), "nope").unwrap_err();
        assert!(matches!(err, InsightError::ColumnNotFound { column } if column == "nope"));
    }

    #[test]
    fn binary_codes_accept_bools_and_zero_one() {
        assert_eq!(
            binary_column(&frame(), "active").unwrap(),
            vec![Some(true), Some(false), None, Some(true)]
        );
        assert_eq!(
            binary_column(&frame(), "flag").unwrap(),
            vec![Some(true), Some(false), Some(true), None]
        );
    }

    #[test]
    fn unique_values_are_sorted() {
        assert_eq!(
            unique_scalars(&frame(), "flag").unwrap(),
            vec![Scalar::Int(0), Scalar::Int(1), Scalar::Int(2)]
        );
    }

    #[test]
    fn pairs_drop_rows_with_a_gap() {
        let (x, y) = paired_floats(&frame(), "x", "y").unwrap();
        assert_eq!(x, vec![1.0, 4.0]);
        assert_eq!(y, vec![2.0, 8.0]);
    }
}
