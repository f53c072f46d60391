//! Default column profiler.
//!
//! Type assignment, first match wins:
//!
//! 1. No non-null value, or a single distinct value -> `CONST`
//! 2. Boolean dtype -> `BOOL`
//! 3. Date/datetime dtype, or text that parses as a date throughout -> `DATE`
//! 4. Numeric dtype -> `NUM`, later demoted to `CORR` when strongly
//!    correlated with an earlier numeric column
//! 5. Text -> `CAT`, or `UNIQUE` when every value is distinct

use chrono::{NaiveDate, NaiveDateTime};
use insight_common::for_each_value;
use insight_model::{ColumnProfile, ColumnProfiler, Scalar, TypeCode, ValueCounts};
use insight_stats::pearsonr;
use polars::prelude::{Column, DataFrame, DataType};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

/// Date layouts recognised in text columns.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Settings for [`DefaultProfiler`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilerOptions {
    /// Absolute Pearson r at or above which a numeric column is rejected as
    /// a near-duplicate of an earlier one.
    pub correlation_threshold: f64,
}

impl Default for ProfilerOptions {
    fn default() -> Self {
        Self {
            correlation_threshold: 0.9,
        }
    }
}

impl ProfilerOptions {
    pub fn with_correlation_threshold(mut self, threshold: f64) -> Self {
        self.correlation_threshold = threshold;
        self
    }
}

/// Profiles every column of a frame in column order.
#[derive(Debug, Clone, Default)]
pub struct DefaultProfiler {
    options: ProfilerOptions,
}

impl DefaultProfiler {
    pub fn new(options: ProfilerOptions) -> Self {
        Self { options }
    }
}

impl ColumnProfiler for DefaultProfiler {
    fn profile(&self, df: &DataFrame) -> insight_model::Result<Vec<ColumnProfile>> {
        let span = info_span!("profile", columns = df.width(), rows = df.height());
        let _guard = span.enter();

        let mut profiles = Vec::with_capacity(df.width());
        // Numeric columns that stayed NUM, with their values.
        let mut kept_numeric: Vec<(String, Vec<Option<f64>>)> = Vec::new();

        for column in df.get_columns() {
            let name = column.name().to_string();
            let mut values = Vec::with_capacity(df.height());
            for_each_value(df, &name, |_, value| values.push(Scalar::from_any(value)))?;
            let counts = ValueCounts::from_values(values.iter().flatten().cloned());

            let mut type_code = base_type(column, &counts);
            if type_code == TypeCode::Num {
                let numbers: Vec<Option<f64>> =
                    values.iter().map(|v| v.as_ref().and_then(Scalar::as_f64)).collect();
                if let Some(other) = self.correlated_with(&numbers, &kept_numeric) {
                    debug!(column = %name, correlated_with = %other, "rejected as highly correlated");
                    type_code = TypeCode::Corr;
                } else {
                    kept_numeric.push((name.clone(), numbers));
                }
            }

            debug!(column = %name, type_code = type_code.as_str(), distinct = counts.len(), "profiled column");
            profiles.push(ColumnProfile::from_counts(name, type_code, counts));
        }
        Ok(profiles)
    }
}

impl DefaultProfiler {
    /// Name of the first kept numeric column correlated with `numbers`.
    fn correlated_with<'a>(
        &self,
        numbers: &[Option<f64>],
        kept: &'a [(String, Vec<Option<f64>>)],
    ) -> Option<&'a str> {
        kept.iter().find_map(|(name, other)| {
            let (x, y): (Vec<f64>, Vec<f64>) = numbers
                .iter()
                .zip(other)
                .filter_map(|row| match row {
                    (Some(a), Some(b)) => Some((*a, *b)),
                    _ => None,
                })
                .unzip();
            let r = pearsonr(&x, &y).ok()?.statistic;
            (r.abs() >= self.options.correlation_threshold).then_some(name.as_str())
        })
    }
}

fn base_type(column: &Column, counts: &ValueCounts) -> TypeCode {
    if counts.len() <= 1 {
        return TypeCode::Const;
    }
    match column.dtype() {
        DataType::Boolean => TypeCode::Bool,
        DataType::Date | DataType::Datetime(_, _) => TypeCode::Date,
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64
        | DataType::Float32
        | DataType::Float64 => TypeCode::Num,
        DataType::String if all_dates(counts) => TypeCode::Date,
        DataType::String if counts.len() == counts.total() => TypeCode::Unique,
        DataType::String => TypeCode::Cat,
        other => TypeCode::Other(other.to_string()),
    }
}

fn all_dates(counts: &ValueCounts) -> bool {
    counts.values().all(|value| match value {
        Scalar::Text(text) => looks_like_date(text),
        _ => false,
    })
}

/// Returns true when `value` matches one of the recognised date layouts.
pub fn looks_like_date(value: &str) -> bool {
    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(trimmed, fmt).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).is_ok())
}
