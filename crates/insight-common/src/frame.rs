//! Row-wise column extraction from a `DataFrame`.

use polars::prelude::{AnyValue, DataFrame, NamedFrom, PolarsResult, Series};

use crate::anyvalue::{any_to_f64, any_to_string, is_null};

/// Reads a column as optional strings; nulls become `None`.
pub fn string_column(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let series = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        if is_null(&value) {
            values.push(None);
        } else {
            values.push(Some(any_to_string(value)));
        }
    }
    Ok(values)
}

/// Reads a column as optional floats; nulls, NaN and non-numeric text become `None`.
pub fn numeric_column_f64(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let series = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        values.push(any_to_f64(value));
    }
    Ok(values)
}

/// Visits every cell of a column in row order.
pub fn for_each_value<F>(df: &DataFrame, name: &str, mut visit: F) -> PolarsResult<()>
where
    F: FnMut(usize, AnyValue<'_>),
{
    let series = df.column(name)?;
    for idx in 0..df.height() {
        visit(idx, series.get(idx).unwrap_or(AnyValue::Null));
    }
    Ok(())
}

/// Replaces (or adds) a nullable `Int32` column.
pub fn set_i32_column(df: &mut DataFrame, name: &str, values: Vec<Option<i32>>) -> PolarsResult<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn};

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("name".into(), vec![Some("a"), None, Some("c")]).into_column(),
            Series::new("score".into(), vec![Some(1.5), Some(f64::NAN), None]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn string_column_keeps_nulls() {
        let values = string_column(&frame(), "name").unwrap();
        assert_eq!(values, vec![Some("a".to_string()), None, Some("c".to_string())]);
    }

    #[test]
    fn numeric_column_drops_nan() {
        let values = numeric_column_f64(&frame(), "score").unwrap();
        assert_eq!(values, vec![Some(1.5), None, None]);
    }

    #[test]
    fn missing_column_is_an_error() {
        assert!(string_column(&frame(), "missing").is_err());
    }

    #[test]
    fn set_i32_column_replaces_in_place() {
        let mut df = frame();
        set_i32_column(&mut df, "name", vec![Some(0), None, Some(1)]).unwrap();
        let column: &Column = df.column("name").unwrap();
        assert_eq!(column.get(2).unwrap(), AnyValue::Int32(1));
        assert_eq!(df.width(), 2);
    }
}
