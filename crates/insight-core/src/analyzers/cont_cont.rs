//! `cont X cont`: Pearson correlation of two continuous columns.

use insight_model::{AnalysisKind, PairCandidate, PipelineOptions, Result};
use insight_narrative::continuous_vs_continuous;
use insight_stats::pearsonr;
use polars::prelude::DataFrame;

use super::analyzer_trait::{PairAnalysis, PairAnalyzer, degenerate};
use crate::frame::paired_floats;

pub struct CorrelationAnalyzer;

impl PairAnalyzer for CorrelationAnalyzer {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::ContCont
    }

    fn description(&self) -> &'static str {
        "Pearson correlation over pairwise complete rows"
    }

    fn analyze(
        &self,
        df: &DataFrame,
        pair: &PairCandidate,
        options: &PipelineOptions,
    ) -> Result<PairAnalysis> {
        let (x, y) = paired_floats(df, &pair.first, &pair.second)?;
        let result = pearsonr(&x, &y).map_err(|err| degenerate(&pair.first, err))?;
        let coef = result.statistic;

        Ok(PairAnalysis {
            result,
            magnitude: Some(coef),
            headline: None,
            narrative: continuous_vs_continuous(
                &pair.first,
                &pair.second,
                coef,
                options.is_significant(result.p_value),
            ),
        })
    }
}
