//! Column profiles: the per-column summary produced by a profiling collaborator.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use insight_common::{any_to_i64, is_null};
use polars::prelude::AnyValue;
use serde::{Deserialize, Serialize};

/// Storage-level type code assigned by the profiler.
///
/// These follow the profiler's own vocabulary and are distinct from the
/// analytical [`SemanticTag`](crate::SemanticTag) a column ends up with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeCode {
    /// Every non-null value is distinct.
    Unique,
    /// Date or datetime values.
    Date,
    /// A single value (or no values at all).
    Const,
    /// Numeric column highly correlated with an earlier column.
    Corr,
    /// Numeric column.
    Num,
    /// Textual / categorical column.
    Cat,
    /// Boolean column.
    Bool,
    /// Anything the profiler could not place.
    Other(String),
}

impl TypeCode {
    /// Returns the canonical upper-case code.
    pub fn as_str(&self) -> &str {
        match self {
            TypeCode::Unique => "UNIQUE",
            TypeCode::Date => "DATE",
            TypeCode::Const => "CONST",
            TypeCode::Corr => "CORR",
            TypeCode::Num => "NUM",
            TypeCode::Cat => "CAT",
            TypeCode::Bool => "BOOL",
            TypeCode::Other(code) => code.as_str(),
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeCode {
    type Err = std::convert::Infallible;

    /// Parses a type code (case-insensitive). Unrecognized codes become
    /// [`TypeCode::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Ok(match normalized.as_str() {
            "UNIQUE" => TypeCode::Unique,
            "DATE" => TypeCode::Date,
            "CONST" => TypeCode::Const,
            "CORR" => TypeCode::Corr,
            "NUM" => TypeCode::Num,
            "CAT" => TypeCode::Cat,
            "BOOL" => TypeCode::Bool,
            _ => TypeCode::Other(normalized),
        })
    }
}

/// A single non-null cell value.
///
/// Floats compare by [`f64::total_cmp`] so that scalars can key ordered maps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Converts a cell value. Nulls and NaN become `None`; temporal and other
    /// non-primitive values become text.
    pub fn from_any(value: AnyValue<'_>) -> Option<Self> {
        if is_null(&value) {
            return None;
        }
        match value {
            AnyValue::Boolean(b) => Some(Scalar::Bool(b)),
            AnyValue::Float32(v) => Some(Scalar::Float(f64::from(v))),
            AnyValue::Float64(v) => Some(Scalar::Float(v)),
            AnyValue::String(s) => Some(Scalar::Text(s.to_string())),
            AnyValue::StringOwned(s) => Some(Scalar::Text(s.to_string())),
            AnyValue::Int8(_)
            | AnyValue::Int16(_)
            | AnyValue::Int32(_)
            | AnyValue::Int64(_)
            | AnyValue::UInt8(_)
            | AnyValue::UInt16(_)
            | AnyValue::UInt32(_)
            | AnyValue::UInt64(_) => {
                let text = value.to_string();
                Some(any_to_i64(value).map_or(Scalar::Text(text), Scalar::Int))
            }
            other => Some(Scalar::Text(other.to_string())),
        }
    }

    /// Returns true for textual values.
    pub fn is_text(&self) -> bool {
        matches!(self, Scalar::Text(_))
    }

    /// Returns the value as an integer when it is integral.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(v) => Some(*v),
            Scalar::Float(v) if v.fract() == 0.0 && v.is_finite() => Some(*v as i64),
            _ => None,
        }
    }

    /// Returns the value as a float when it is numeric or boolean.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Scalar::Int(v) => Some(*v as f64),
            Scalar::Float(v) => Some(*v),
            Scalar::Text(_) => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Scalar::Bool(_) => 0,
            Scalar::Int(_) | Scalar::Float(_) => 1,
            Scalar::Text(_) => 2,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a.cmp(b),
            (Scalar::Int(a), Scalar::Int(b)) => a.cmp(b),
            (Scalar::Text(a), Scalar::Text(b)) => a.cmp(b),
            (Scalar::Int(a), Scalar::Float(b)) => (*a as f64).total_cmp(b),
            (Scalar::Float(a), Scalar::Int(b)) => a.total_cmp(&(*b as f64)),
            (Scalar::Float(a), Scalar::Float(b)) => a.total_cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Distinct non-null values of a column with their frequencies.
///
/// Entries are kept in descending frequency order; ties keep ascending
/// value order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueCounts {
    entries: Vec<(Scalar, usize)>,
}

impl ValueCounts {
    /// Builds value counts from `(value, count)` pairs, merging duplicates.
    pub fn new(pairs: impl IntoIterator<Item = (Scalar, usize)>) -> Self {
        let mut merged: std::collections::BTreeMap<Scalar, usize> =
            std::collections::BTreeMap::new();
        for (value, count) in pairs {
            *merged.entry(value).or_insert(0) += count;
        }
        let mut entries: Vec<(Scalar, usize)> = merged.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Self { entries }
    }

    /// Counts the given values.
    pub fn from_values(values: impl IntoIterator<Item = Scalar>) -> Self {
        Self::new(values.into_iter().map(|v| (v, 1)))
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the column has no non-null values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct values, most frequent first.
    pub fn values(&self) -> impl Iterator<Item = &Scalar> {
        self.entries.iter().map(|(v, _)| v)
    }

    /// Frequencies, most frequent first.
    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|(_, c)| *c)
    }

    /// Iterates `(value, count)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&Scalar, usize)> {
        self.entries.iter().map(|(v, c)| (v, *c))
    }

    /// Frequency of the least common value.
    pub fn min_count(&self) -> Option<usize> {
        self.counts().min()
    }

    /// Total number of non-null values.
    pub fn total(&self) -> usize {
        self.counts().sum()
    }

    /// Most frequent value.
    pub fn mode(&self) -> Option<&Scalar> {
        self.entries.first().map(|(v, _)| v)
    }
}

/// Per-column summary consumed by the semantic classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub type_code: TypeCode,
    pub distinct_count: usize,
    pub is_unique: bool,
    pub mode: Option<Scalar>,
    pub value_counts: ValueCounts,
}

impl ColumnProfile {
    /// Builds a profile whose distinct count, uniqueness and mode are derived
    /// from the value counts.
    pub fn from_counts(
        name: impl Into<String>,
        type_code: TypeCode,
        value_counts: ValueCounts,
    ) -> Self {
        let distinct_count = value_counts.len();
        let is_unique = distinct_count > 0 && distinct_count == value_counts.total();
        let mode = value_counts.mode().cloned();
        Self {
            name: name.into(),
            type_code,
            distinct_count,
            is_unique,
            mode,
            value_counts,
        }
    }

    /// Returns true if the profile's mode is a textual value.
    pub fn mode_is_text(&self) -> bool {
        self.mode.as_ref().is_some_and(Scalar::is_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_code_parses_case_insensitively() {
        assert_eq!("num".parse::<TypeCode>().unwrap(), TypeCode::Num);
        assert_eq!(" Bool ".parse::<TypeCode>().unwrap(), TypeCode::Bool);
        assert_eq!(
            "rejected".parse::<TypeCode>().unwrap(),
            TypeCode::Other("REJECTED".to_string())
        );
    }

    #[test]
    fn scalar_numeric_comparison_crosses_int_and_float() {
        assert_eq!(Scalar::Int(2), Scalar::Float(2.0));
        assert!(Scalar::Int(1) < Scalar::Float(1.5));
        assert!(Scalar::Bool(true) < Scalar::Int(0));
        assert!(Scalar::Int(10) < Scalar::Text("a".into()));
    }

    #[test]
    fn scalar_from_any_value() {
        assert_eq!(Scalar::from_any(AnyValue::Null), None);
        assert_eq!(Scalar::from_any(AnyValue::Float64(f64::NAN)), None);
        assert_eq!(Scalar::from_any(AnyValue::UInt8(1)), Some(Scalar::Int(1)));
        assert_eq!(Scalar::from_any(AnyValue::Boolean(true)), Some(Scalar::Bool(true)));
        assert_eq!(
            Scalar::from_any(AnyValue::String("me")),
            Some(Scalar::Text("me".to_string()))
        );
    }

    #[test]
    fn value_counts_sorted_by_frequency_then_value() {
        let counts = ValueCounts::from_values(
            ["b", "a", "b", "c", "a"]
                .into_iter()
                .map(|s| Scalar::Text(s.to_string())),
        );
        let values: Vec<String> = counts.values().map(ToString::to_string).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
        assert_eq!(counts.min_count(), Some(1));
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.mode(), Some(&Scalar::Text("a".into())));
    }

    #[test]
    fn profile_from_counts_derives_uniqueness() {
        let unique = ColumnProfile::from_counts(
            "email",
            TypeCode::Cat,
            ValueCounts::from_values(["x", "y"].map(|s| Scalar::Text(s.into()))),
        );
        assert!(unique.is_unique);
        assert!(unique.mode_is_text());

        let repeated = ColumnProfile::from_counts(
            "n",
            TypeCode::Num,
            ValueCounts::new([(Scalar::Int(1), 3), (Scalar::Int(2), 1)]),
        );
        assert!(!repeated.is_unique);
        assert_eq!(repeated.distinct_count, 2);
        assert_eq!(repeated.mode, Some(Scalar::Int(1)));
    }
}
