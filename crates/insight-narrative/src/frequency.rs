//! Row dominance within the columns of a normalized frequency table.

use std::collections::BTreeMap;

use insight_common::title_case;
use insight_model::{InsightError, Result};
use insight_stats::ContingencyTable;

use crate::crosstab::arg_max;

/// Named groups of table columns, keyed by label bucket.
pub type LabelBuckets = BTreeMap<String, Vec<String>>;

/// Reports, for every column listed under `bucket`, the row that dominates
/// it when the first two rows differ by at least `threshold`.
///
/// # Errors
///
/// [`InsightError::MissingBucket`] when `bucket` is absent, and
/// [`InsightError::ColumnNotFound`] when a listed column is not in `table`.
pub fn column_dominance(
    table: &ContingencyTable,
    buckets: &LabelBuckets,
    bucket: &str,
    threshold: f64,
) -> Result<String> {
    let columns = buckets.get(bucket).ok_or_else(|| InsightError::MissingBucket {
        label: bucket.to_string(),
    })?;

    let mut insights = String::new();
    for column in columns {
        let values = table
            .col_index(column)
            .and_then(|idx| table.column(idx))
            .ok_or_else(|| InsightError::ColumnNotFound {
                column: column.clone(),
            })?;
        let (Some(top), Some(bottom)) = (values.first(), values.get(1)) else {
            continue;
        };
        let diff = (top - bottom).abs();
        if diff < threshold {
            continue;
        }
        if let Some(row) = arg_max(&values) {
            insights.push_str(&format!(
                "'{}' rows have {:.1}% of '{column}'. ",
                title_case(&table.row_labels()[row]),
                diff * 100.0
            ));
        }
    }
    Ok(insights)
}
