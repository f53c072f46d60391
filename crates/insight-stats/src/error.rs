//! Error types for statistical tests.

use thiserror::Error;

/// Errors raised when a test cannot be computed on its inputs.
#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    // === Input Shape Errors ===
    /// Too few observations (or groups) for the test.
    #[error("need at least {needed} {what}, found {found}")]
    InsufficientData {
        what: &'static str,
        needed: usize,
        found: usize,
    },

    /// Paired inputs have different lengths.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Contingency table is malformed.
    #[error("invalid contingency table: {message}")]
    InvalidTable { message: String },

    // === Degenerate Data Errors ===
    /// Input has no variance, so the statistic is undefined.
    #[error("zero variance in {what}")]
    ZeroVariance { what: &'static str },

    /// A contingency table cell has an expected frequency of zero.
    #[error("contingency table has an expected frequency of zero")]
    ZeroExpected,

    // === Distribution Errors ===
    /// A reference distribution could not be constructed.
    #[error("distribution error: {message}")]
    Distribution { message: String },
}

impl StatsError {
    pub(crate) fn distribution(err: impl std::fmt::Display) -> Self {
        Self::Distribution {
            message: err.to_string(),
        }
    }
}

/// Result type for statistical tests.
pub type Result<T> = std::result::Result<T, StatsError>;
