//! Insight discovery pipeline.
//!
//! # Stage Order
//!
//! 1. **Classify** - tag every profiled column and collect rewrites
//! 2. **Recode** - apply binary dummy rewrites to a copy of the dataset
//! 3. **Candidates** - build typed column pairs from the bucket map
//! 4. **Dispatch** - run each pair through its analyzer
//! 5. **Record** - apply the significance policy and emit records
//!
//! A pair that fails (non-binary discriminator, degenerate group, missing
//! column) is logged and skipped; the run always returns the records
//! gathered so far. A rewrite that cannot be applied skips every pair
//! touching its column.
//!
//! # Example
//!
//! ```ignore
//! use insight_core::InsightPipeline;
//!
//! let pipeline = InsightPipeline::new(PipelineOptions::default())?;
//! let output = pipeline.run(&df, &profiles);
//! for record in &output.records {
//!     println!("{}", record.insight_text);
//! }
//! ```

use insight_classify::{Classification, apply_rewrites, classify_columns};
use insight_model::{
    AnalysisKind, CandidateSet, ColumnProfile, InsightRecord, PairCandidate, PipelineOptions,
    Result,
};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use crate::analyzers::{AnalyzerRegistry, default_registry};
use crate::candidates::generate_candidates;
use crate::record::build_record;

/// A candidate that produced no record because its test failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedPair {
    pub pair: PairCandidate,
    pub reason: String,
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    pub classification: Classification,
    pub candidates: CandidateSet,
    /// Records in kind order, then candidate order.
    pub records: Vec<InsightRecord>,
    pub skipped: Vec<SkippedPair>,
}

impl PipelineOutput {
    /// Number of candidates that were tested without error.
    pub fn tested(&self) -> usize {
        self.candidates.len() - self.skipped.len()
    }

    /// Records of one analysis kind.
    pub fn records_for(&self, kind: AnalysisKind) -> impl Iterator<Item = &InsightRecord> {
        self.records
            .iter()
            .filter(move |record| record.analysis_kind == kind)
    }
}

/// Runs classification, candidate generation and pair testing over one
/// dataset snapshot.
pub struct InsightPipeline<'r> {
    options: PipelineOptions,
    registry: &'r AnalyzerRegistry,
}

impl InsightPipeline<'static> {
    /// Creates a pipeline using the standard analyzers.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the options are invalid.
    pub fn new(options: PipelineOptions) -> Result<Self> {
        Self::with_registry(options, default_registry())
    }
}

impl<'r> InsightPipeline<'r> {
    /// Creates a pipeline dispatching through a custom registry.
    pub fn with_registry(options: PipelineOptions, registry: &'r AnalyzerRegistry) -> Result<Self> {
        options.validate()?;
        Ok(Self { options, registry })
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Runs every stage over `df`.
    ///
    /// `profiles` must describe the columns of `df`; columns without a
    /// profile are never tested. The caller's dataset is left untouched.
    ///
    /// Per-pair failures, including pairs over a column whose rewrite
    /// failed, land in [`PipelineOutput::skipped`].
    pub fn run(&self, df: &DataFrame, profiles: &[ColumnProfile]) -> PipelineOutput {
        let span = info_span!("insight_pipeline", dataset = %self.options.dataset_id, rows = df.height());
        let _guard = span.enter();

        let classification = classify_columns(profiles, &self.options.classifier());

        let mut data = df.clone();
        let mut failed_rewrites: Vec<(&str, String)> = Vec::new();
        if !classification.rewrites.is_empty() {
            let _recode = info_span!("recode", rewrites = classification.rewrites.len()).entered();
            for rewrite in &classification.rewrites {
                if let Err(err) = apply_rewrites(&mut data, std::slice::from_ref(rewrite)) {
                    warn!(column = %rewrite.column(), error = %err, "rewrite failed");
                    failed_rewrites.push((rewrite.column(), format!("rewrite failed: {err}")));
                }
            }
        }

        let candidates = generate_candidates(&classification.buckets);
        info!(
            columns = profiles.len(),
            tagged = classification.buckets.column_count(),
            candidates = candidates.len(),
            "generated candidate pairs"
        );

        let mut skipped = Vec::new();
        let mut testable = CandidateSet::new();
        for pair in candidates.iter() {
            let failed = failed_rewrites
                .iter()
                .find(|(column, _)| pair.first == *column || pair.second == *column);
            match failed {
                Some((_, reason)) => skipped.push(SkippedPair {
                    pair: pair.clone(),
                    reason: reason.clone(),
                }),
                None => testable.push(pair.clone()),
            }
        }
        let (records, dispatch_skipped) = self.dispatch(&data, &testable);
        skipped.extend(dispatch_skipped);

        info!(
            records = records.len(),
            skipped = skipped.len(),
            "insight pipeline finished"
        );
        PipelineOutput {
            classification,
            candidates,
            records,
            skipped,
        }
    }

    /// Tests every candidate, isolating per-pair failures.
    pub fn dispatch(
        &self,
        df: &DataFrame,
        candidates: &CandidateSet,
    ) -> (Vec<InsightRecord>, Vec<SkippedPair>) {
        let mut records = Vec::new();
        let mut skipped = Vec::new();
        for pair in candidates.iter() {
            let _pair_span = info_span!("pair", kind = %pair.kind, first = %pair.first, second = %pair.second).entered();
            let outcome = self
                .registry
                .get(pair.kind)
                .and_then(|analyzer| analyzer.analyze(df, pair, &self.options));
            match outcome {
                Ok(analysis) => {
                    debug!(
                        statistic = analysis.result.statistic,
                        p_value = analysis.result.p_value,
                        "pair tested"
                    );
                    if let Some(record) = build_record(pair, &analysis, &self.options) {
                        records.push(record);
                    }
                }
                Err(err) => {
                    if err.is_pair_local() {
                        debug!(error = %err, "pair skipped");
                    } else {
                        warn!(error = %err, "pair skipped");
                    }
                    skipped.push(SkippedPair {
                        pair: pair.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }
        (records, skipped)
    }
}
