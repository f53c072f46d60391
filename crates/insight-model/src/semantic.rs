//! Semantic tags and the bucket map built from them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InsightError;

/// Analytical category assigned to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticTag {
    UniqueIdentifier,
    Date,
    Constant,
    HighlyCorrelated,
    Continuous,
    Categorical,
    Binary,
    HighCardinality,
    Unknown,
}

impl SemanticTag {
    pub const ALL: [SemanticTag; 9] = [
        SemanticTag::UniqueIdentifier,
        SemanticTag::Date,
        SemanticTag::Constant,
        SemanticTag::HighlyCorrelated,
        SemanticTag::Continuous,
        SemanticTag::Categorical,
        SemanticTag::Binary,
        SemanticTag::HighCardinality,
        SemanticTag::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticTag::UniqueIdentifier => "unique_identifier",
            SemanticTag::Date => "date",
            SemanticTag::Constant => "constant",
            SemanticTag::HighlyCorrelated => "highly_correlated",
            SemanticTag::Continuous => "continuous",
            SemanticTag::Categorical => "categorical",
            SemanticTag::Binary => "binary",
            SemanticTag::HighCardinality => "high_cardinality",
            SemanticTag::Unknown => "unknown",
        }
    }

    /// Returns true for the tags that take part in pairwise analysis.
    pub fn is_analyzable(&self) -> bool {
        matches!(
            self,
            SemanticTag::Binary | SemanticTag::Categorical | SemanticTag::Continuous
        )
    }
}

impl fmt::Display for SemanticTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticTag {
    type Err = InsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        SemanticTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == normalized)
            .ok_or_else(|| InsightError::config(format!("unknown semantic tag: {s}")))
    }
}

/// Why a column received no semantic tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Categorical column whose rarest value is at or below the minimum count.
    SparseCategory,
    /// Boolean column whose minority class is at or below the minimum count.
    SmallMinorityClass,
}

impl ExclusionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExclusionReason::SparseCategory => "sparse category",
            ExclusionReason::SmallMinorityClass => "small minority class",
        }
    }
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnDecision {
    Tagged(SemanticTag),
    Excluded(ExclusionReason),
}

impl ColumnDecision {
    pub fn tag(&self) -> Option<SemanticTag> {
        match self {
            ColumnDecision::Tagged(tag) => Some(*tag),
            ColumnDecision::Excluded(_) => None,
        }
    }
}

/// Column names grouped by semantic tag.
///
/// Within a bucket, names keep the order in which they were inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketMap {
    buckets: BTreeMap<SemanticTag, Vec<String>>,
}

impl BucketMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column to a bucket. Names already present are ignored.
    pub fn insert(&mut self, tag: SemanticTag, column: impl Into<String>) {
        let column = column.into();
        let bucket = self.buckets.entry(tag).or_default();
        if !bucket.contains(&column) {
            bucket.push(column);
        }
    }

    /// Members of a bucket; empty when the bucket is absent.
    pub fn get(&self, tag: SemanticTag) -> &[String] {
        self.buckets.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, tag: SemanticTag) -> usize {
        self.get(tag).len()
    }

    /// Returns the tag a column was placed under, if any.
    pub fn tag_of(&self, column: &str) -> Option<SemanticTag> {
        self.buckets
            .iter()
            .find(|(_, names)| names.iter().any(|name| name == column))
            .map(|(tag, _)| *tag)
    }

    /// Iterates non-empty buckets in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (SemanticTag, &[String])> {
        self.buckets
            .iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(tag, names)| (*tag, names.as_slice()))
    }

    /// Total number of bucketed columns.
    pub fn column_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

impl FromIterator<(SemanticTag, String)> for BucketMap {
    fn from_iter<T: IntoIterator<Item = (SemanticTag, String)>>(iter: T) -> Self {
        let mut map = BucketMap::new();
        for (tag, column) in iter {
            map.insert(tag, column);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trips_through_str() {
        for tag in SemanticTag::ALL {
            assert_eq!(tag.as_str().parse::<SemanticTag>().unwrap(), tag);
        }
        assert!("numeric".parse::<SemanticTag>().is_err());
    }

    #[test]
    fn bucket_keeps_insertion_order() {
        let mut map = BucketMap::new();
        map.insert(SemanticTag::Continuous, "price");
        map.insert(SemanticTag::Continuous, "age");
        map.insert(SemanticTag::Continuous, "price");
        assert_eq!(map.get(SemanticTag::Continuous), ["price", "age"]);
        assert_eq!(map.tag_of("age"), Some(SemanticTag::Continuous));
        assert!(map.get(SemanticTag::Binary).is_empty());
        assert_eq!(map.column_count(), 2);
    }
}
