//! `bin X cont`: t-test of a continuous column split by a binary column.

use insight_classify::derive_binary_labels;
use insight_model::{AnalysisKind, InsightError, PairCandidate, PipelineOptions, Result};
use insight_narrative::{binary_vs_continuous, significance};
use insight_stats::{GroupSummary, ttest_ind_from_stats};
use polars::prelude::DataFrame;

use super::analyzer_trait::{PairAnalysis, PairAnalyzer, degenerate};
use crate::frame::{binary_column, float_column, unique_scalars};

pub struct BinaryContinuousAnalyzer;

impl PairAnalyzer for BinaryContinuousAnalyzer {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::BinCont
    }

    fn description(&self) -> &'static str {
        "Two-sample t-test from group summaries"
    }

    fn analyze(
        &self,
        df: &DataFrame,
        pair: &PairCandidate,
        options: &PipelineOptions,
    ) -> Result<PairAnalysis> {
        let (binary, continuous) = (pair.first.as_str(), pair.second.as_str());
        let labels = derive_binary_labels(binary, &unique_scalars(df, binary)?)?;

        let mut positive = Vec::new();
        let mut negative = Vec::new();
        for (group, value) in binary_column(df, binary)?
            .into_iter()
            .zip(float_column(df, continuous)?)
        {
            match (group, value) {
                (Some(true), Some(value)) => positive.push(value),
                (Some(false), Some(value)) => negative.push(value),
                _ => {}
            }
        }

        // Summaries are computed once and shared by the test and the narrative.
        let positive = summarize(binary, &labels.positive, &positive)?;
        let negative = summarize(binary, &labels.negative, &negative)?;
        let result =
            ttest_ind_from_stats(&positive, &negative).map_err(|err| degenerate(continuous, err))?;

        Ok(PairAnalysis {
            result,
            magnitude: None,
            headline: Some(significance::binary_vs_continuous(&labels, continuous)),
            narrative: binary_vs_continuous(
                &labels,
                continuous,
                &positive,
                &negative,
                &options.narrative,
            ),
        })
    }
}

fn summarize(column: &str, label: &str, values: &[f64]) -> Result<GroupSummary> {
    GroupSummary::from_values(values).ok_or_else(|| InsightError::DegenerateGroup {
        column: column.to_string(),
        reason: format!("group '{label}' has no values"),
    })
}
