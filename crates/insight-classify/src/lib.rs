//! Semantic classification of dataset columns.
//!
//! The classifier maps each [`ColumnProfile`] to at most one
//! [`SemanticTag`], groups the tagged columns into a [`BucketMap`], and
//! returns column rewrites (binary dummy encoding) instead of touching the
//! dataset itself.

pub mod labels;
pub mod recode;
pub mod rules;

pub use labels::derive_binary_labels;
pub use recode::{ColumnRewrite, apply_rewrites};
pub use rules::{ColumnOutcome, classify_column, is_contiguous, looks_like_identifier};

use insight_model::{
    BucketMap, ClassifierOptions, ColumnDecision, ColumnProfile, SemanticTag,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

/// The decision taken for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnClassification {
    pub column: String,
    pub decision: ColumnDecision,
}

/// Result of classifying every column of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// One entry per profile, in profile order.
    pub tags: Vec<ColumnClassification>,
    pub buckets: BucketMap,
    pub rewrites: Vec<ColumnRewrite>,
}

impl Classification {
    /// Decision recorded for a column.
    pub fn decision_for(&self, column: &str) -> Option<ColumnDecision> {
        self.tags
            .iter()
            .find(|entry| entry.column == column)
            .map(|entry| entry.decision)
    }

    /// Columns the classifier deliberately left untagged.
    pub fn excluded(&self) -> impl Iterator<Item = &ColumnClassification> {
        self.tags
            .iter()
            .filter(|entry| matches!(entry.decision, ColumnDecision::Excluded(_)))
    }

    pub fn bucket(&self, tag: SemanticTag) -> &[String] {
        self.buckets.get(tag)
    }
}

/// Classifies every profile and builds the bucket map.
///
/// The function is pure: the dataset is not modified, and running it twice
/// on the same profiles yields the same classification.
pub fn classify_columns(profiles: &[ColumnProfile], options: &ClassifierOptions) -> Classification {
    let span = info_span!("classify", columns = profiles.len());
    let _guard = span.enter();

    let mut classification = Classification::default();
    for profile in profiles {
        let outcome = classify_column(profile, options);
        match outcome.decision {
            ColumnDecision::Tagged(tag) => {
                debug!(column = %profile.name, tag = %tag, "classified column");
                classification.buckets.insert(tag, profile.name.clone());
            }
            ColumnDecision::Excluded(reason) => {
                debug!(column = %profile.name, reason = %reason, "column excluded");
            }
        }
        if let Some(rewrite) = outcome.rewrite {
            classification.rewrites.push(rewrite);
        }
        classification.tags.push(ColumnClassification {
            column: profile.name.clone(),
            decision: outcome.decision,
        });
    }
    classification
}
