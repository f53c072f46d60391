//! Pair analyzer trait and registry.
//!
//! Every [`AnalysisKind`] is served by one [`PairAnalyzer`]. The
//! [`AnalyzerRegistry`] maps kinds to analyzers so the orchestrator runs one
//! dispatch loop for all five kinds.
//!
//! # Example
//!
//! ```ignore
//! use insight_core::analyzers::default_registry;
//!
//! let analyzer = default_registry().get(pair.kind)?;
//! let analysis = analyzer.analyze(&df, &pair, &options)?;
//! ```

use std::collections::BTreeMap;
use std::sync::OnceLock;

use insight_model::{AnalysisKind, InsightError, PairCandidate, PipelineOptions, Result};
use insight_stats::{StatsError, TestResult};
use polars::prelude::DataFrame;

/// Raw outcome of testing one pair, before the significance policy is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PairAnalysis {
    pub result: TestResult,
    /// Effect size reported in the record (Pearson r for correlations).
    pub magnitude: Option<f64>,
    /// Sentence stating the difference; only used when the pair is significant.
    pub headline: Option<String>,
    /// Secondary findings, independent of significance.
    pub narrative: String,
}

/// Test procedure and narrative for one analysis kind.
///
/// # Implementing an Analyzer
///
/// 1. Implement this trait for a unit struct.
/// 2. Register it in [`build_default_registry`].
pub trait PairAnalyzer: Send + Sync {
    /// The kind this analyzer handles.
    fn kind(&self) -> AnalysisKind;

    /// Returns a human-readable description of the analyzer.
    fn description(&self) -> &'static str {
        "Pair analyzer"
    }

    /// Tests `pair` on `df`.
    ///
    /// # Errors
    ///
    /// Pair-local failures: a non-binary discriminator, a degenerate group,
    /// or a missing column.
    fn analyze(
        &self,
        df: &DataFrame,
        pair: &PairCandidate,
        options: &PipelineOptions,
    ) -> Result<PairAnalysis>;
}

/// Registry of pair analyzers indexed by analysis kind.
#[derive(Default)]
pub struct AnalyzerRegistry {
    analyzers: BTreeMap<AnalysisKind, Box<dyn PairAnalyzer>>,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an analyzer for its kind, replacing any previous one.
    pub fn register(&mut self, analyzer: Box<dyn PairAnalyzer>) {
        self.analyzers.insert(analyzer.kind(), analyzer);
    }

    /// Gets the analyzer for a kind.
    ///
    /// # Errors
    ///
    /// [`InsightError::Config`] when no analyzer is registered for `kind`.
    pub fn get(&self, kind: AnalysisKind) -> Result<&dyn PairAnalyzer> {
        self.analyzers
            .get(&kind)
            .map(|a| a.as_ref())
            .ok_or_else(|| InsightError::config(format!("no analyzer registered for '{kind}'")))
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }

    /// Registered kinds in pipeline order.
    pub fn kinds(&self) -> impl Iterator<Item = AnalysisKind> + '_ {
        self.analyzers.keys().copied()
    }
}

static DEFAULT_REGISTRY: OnceLock<AnalyzerRegistry> = OnceLock::new();

/// Returns the registry with an analyzer for every analysis kind.
///
/// The registry is cached on first access.
pub fn default_registry() -> &'static AnalyzerRegistry {
    DEFAULT_REGISTRY.get_or_init(build_default_registry)
}

/// Builds a registry holding the standard analyzers.
pub fn build_default_registry() -> AnalyzerRegistry {
    let mut registry = AnalyzerRegistry::new();
    registry.register(Box::new(super::bin_cat::BinaryCategoricalAnalyzer));
    registry.register(Box::new(super::bin_bin::BinaryBinaryAnalyzer));
    registry.register(Box::new(super::bin_cont::BinaryContinuousAnalyzer));
    registry.register(Box::new(super::cat_cont::CategoricalContinuousAnalyzer));
    registry.register(Box::new(super::cont_cont::CorrelationAnalyzer));
    registry
}

/// Maps a statistics failure onto the pair-local error taxonomy.
pub(crate) fn degenerate(column: &str, err: StatsError) -> InsightError {
    InsightError::DegenerateGroup {
        column: column.to_string(),
        reason: err.to_string(),
    }
}
