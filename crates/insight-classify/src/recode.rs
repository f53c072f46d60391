//! Column rewrites emitted by the classifier and applied before testing.

use insight_common::{any_to_bool, any_to_string, for_each_value, is_null, set_i32_column};
use insight_model::{InsightError, Result};
use polars::prelude::{AnyValue, DataFrame};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An instruction to rewrite one dataset column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnRewrite {
    /// Drop-first dummy encoding of a two-valued text column into `Int32`
    /// 0/1: `negative` becomes 0 and `positive` becomes 1. Nulls stay null.
    DummyEncode {
        column: String,
        negative: String,
        positive: String,
    },
}

impl ColumnRewrite {
    pub fn column(&self) -> &str {
        match self {
            ColumnRewrite::DummyEncode { column, .. } => column,
        }
    }
}

/// Applies rewrites in order.
///
/// Applying the same rewrite to an already-encoded column leaves it
/// unchanged: cells that are already 0/1 (or boolean) keep their value.
pub fn apply_rewrites(df: &mut DataFrame, rewrites: &[ColumnRewrite]) -> Result<()> {
    for rewrite in rewrites {
        match rewrite {
            ColumnRewrite::DummyEncode {
                column,
                negative,
                positive,
            } => {
                let encoded = dummy_encode(df, column, negative, positive)?;
                set_i32_column(df, column, encoded)?;
                debug!(column = %column, negative = %negative, positive = %positive, "dummy encoded");
            }
        }
    }
    Ok(())
}

fn dummy_encode(
    df: &DataFrame,
    column: &str,
    negative: &str,
    positive: &str,
) -> Result<Vec<Option<i32>>> {
    if df.column(column).is_err() {
        return Err(InsightError::ColumnNotFound {
            column: column.to_string(),
        });
    }

    let mut encoded = Vec::with_capacity(df.height());
    let mut unexpected: Vec<String> = Vec::new();
    for_each_value(df, column, |_, value| {
        if is_null(&value) {
            encoded.push(None);
            return;
        }
        if let AnyValue::String(_) | AnyValue::StringOwned(_) = value {
            let text = any_to_string(value);
            if text == negative {
                encoded.push(Some(0));
            } else if text == positive {
                encoded.push(Some(1));
            } else {
                encoded.push(None);
                if !unexpected.contains(&text) {
                    unexpected.push(text);
                }
            }
            return;
        }
        match any_to_bool(value.clone()) {
            Some(flag) => encoded.push(Some(i32::from(flag))),
            None => {
                encoded.push(None);
                let text = any_to_string(value);
                if !unexpected.contains(&text) {
                    unexpected.push(text);
                }
            }
        }
    })?;

    if !unexpected.is_empty() {
        let mut values = vec![negative.to_string(), positive.to_string()];
        values.extend(unexpected);
        return Err(InsightError::NotBinary {
            column: column.to_string(),
            values,
        });
    }
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn rewrite() -> ColumnRewrite {
        ColumnRewrite::DummyEncode {
            column: "nice_person".to_string(),
            negative: "N".to_string(),
            positive: "Y".to_string(),
        }
    }

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("nice_person".into(), vec![Some("Y"), Some("N"), None, Some("Y")])
                .into_column(),
        ])
        .unwrap()
    }

    fn encoded(df: &DataFrame) -> Vec<AnyValue<'static>> {
        let column = df.column("nice_person").unwrap();
        (0..df.height())
            .map(|i| column.get(i).unwrap().into_static())
            .collect()
    }

    #[test]
    fn encodes_first_value_as_zero() {
        let mut df = frame();
        apply_rewrites(&mut df, &[rewrite()]).unwrap();
        assert_eq!(
            encoded(&df),
            vec![
                AnyValue::Int32(1),
                AnyValue::Int32(0),
                AnyValue::Null,
                AnyValue::Int32(1)
            ]
        );
    }

    #[test]
    fn encoding_twice_is_idempotent() {
        let mut once = frame();
        apply_rewrites(&mut once, &[rewrite()]).unwrap();
        let mut twice = once.clone();
        apply_rewrites(&mut twice, &[rewrite()]).unwrap();
        assert_eq!(encoded(&once), encoded(&twice));
    }

    #[test]
    fn unexpected_values_are_not_binary() {
        let mut df = DataFrame::new(vec![
            Series::new("nice_person".into(), vec!["Y", "N", "maybe"]).into_column(),
        ])
        .unwrap();
        let err = apply_rewrites(&mut df, &[rewrite()]).unwrap_err();
        assert!(matches!(err, InsightError::NotBinary { .. }));
    }

    #[test]
    fn missing_column_is_reported() {
        let mut df = frame();
        let missing = ColumnRewrite::DummyEncode {
            column: "absent".to_string(),
            negative: "a".to_string(),
            positive: "b".to_string(),
        };
        assert!(matches!(
            apply_rewrites(&mut df, &[missing]),
            Err(InsightError::ColumnNotFound { .. })
        ));
    }
}
