//! Error taxonomy for insight discovery.
//!
//! Pair-level errors ([`InsightError::NotBinary`], [`InsightError::DegenerateGroup`],
//! [`InsightError::MissingBucket`]) are isolated by the orchestrator: the pair is
//! skipped and the run continues. [`InsightError::Config`] is fatal to the
//! operation that raised it.

use thiserror::Error;

/// Errors produced while classifying columns and testing column pairs.
#[derive(Debug, Error)]
pub enum InsightError {
    /// A column expected to be binary does not hold exactly two
    /// boolean-like or 0/1 values.
    #[error("{column} not a binary variable? Unique values are: [{}]", values.join(", "))]
    NotBinary { column: String, values: Vec<String> },

    /// A test group is empty, too small, or has zero variance.
    #[error("degenerate group in '{column}': {reason}")]
    DegenerateGroup { column: String, reason: String },

    /// A narrative referenced a label bucket that does not exist.
    #[error("label bucket '{label}' not found")]
    MissingBucket { label: String },

    /// Column not found in the dataset.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// Invalid configuration (unknown analysis kind, bad significance level, ...).
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl InsightError {
    /// Convenience constructor for configuration errors.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns true when the error only invalidates a single column pair.
    pub fn is_pair_local(&self) -> bool {
        !matches!(self, Self::Config { .. })
    }
}

impl From<polars::prelude::PolarsError> for InsightError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for insight operations.
pub type Result<T> = std::result::Result<T, InsightError>;
