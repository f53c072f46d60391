//! Hypothesis tests and descriptive statistics used to screen column pairs.
//!
//! Reference distributions come from `statrs`; the test statistics follow
//! the textbook definitions (pooled-variance t-test, one-way ANOVA,
//! Pearson r, chi-square with Yates' correction on 2x2 tables).

pub mod anova;
pub mod contingency;
pub mod correlation;
pub mod describe;
pub mod error;
pub mod regression;
pub mod ttest;

pub use anova::f_oneway;
pub use contingency::{ChiSquareOutcome, ContingencyTable, chi2_contingency};
pub use correlation::pearsonr;
pub use describe::{GroupSummary, is_close};
pub use error::{Result, StatsError};
pub use regression::linear_slope;
pub use ttest::ttest_ind_from_stats;

/// A test statistic with its p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResult {
    pub statistic: f64,
    /// Always within [0, 1].
    pub p_value: f64,
}

impl TestResult {
    /// Builds a result, clamping the p-value into [0, 1]. A NaN p-value is
    /// treated as 1 (no evidence).
    pub fn new(statistic: f64, p_value: f64) -> Self {
        let p_value = if p_value.is_nan() {
            1.0
        } else {
            p_value.clamp(0.0, 1.0)
        };
        Self { statistic, p_value }
    }

    /// Returns true when `p_value <= siglvl`.
    pub fn is_significant(&self, siglvl: f64) -> bool {
        self.p_value <= siglvl
    }
}
