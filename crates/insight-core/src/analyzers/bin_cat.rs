//! `bin X cat`: chi-square test of a binary column against a categorical one.

use insight_classify::derive_binary_labels;
use insight_common::title_case;
use insight_model::{AnalysisKind, PairCandidate, PipelineOptions, Result};
use insight_narrative::{binary_vs_categorical, significance};
use insight_stats::{ContingencyTable, chi2_contingency};
use polars::prelude::DataFrame;

use super::analyzer_trait::{PairAnalysis, PairAnalyzer, degenerate};
use crate::frame::{binary_column, scalar_column, unique_scalars};

pub struct BinaryCategoricalAnalyzer;

impl PairAnalyzer for BinaryCategoricalAnalyzer {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::BinCat
    }

    fn description(&self) -> &'static str {
        "Chi-square test of independence between a binary and a categorical column"
    }

    fn analyze(
        &self,
        df: &DataFrame,
        pair: &PairCandidate,
        options: &PipelineOptions,
    ) -> Result<PairAnalysis> {
        let (binary, categorical) = (pair.first.as_str(), pair.second.as_str());
        let labels = derive_binary_labels(binary, &unique_scalars(df, binary)?)?;

        let categories = scalar_column(df, categorical)?;
        let groups = binary_column(df, binary)?;
        let observations = categories
            .into_iter()
            .zip(groups)
            .filter_map(|row| match row {
                (Some(category), Some(group)) => Some((category, group)),
                _ => None,
            });
        let table = category_table(ContingencyTable::crosstab(observations))
            .and_then(|table| {
                table.with_col_labels(vec![labels.negative.clone(), labels.positive.clone()])
            })
            .map_err(|err| degenerate(binary, err))?;

        let outcome = chi2_contingency(&table).map_err(|err| degenerate(categorical, err))?;
        Ok(PairAnalysis {
            result: outcome.result(),
            magnitude: None,
            headline: Some(significance::binary_vs_categorical(&labels, categorical)),
            narrative: binary_vs_categorical(&table, categorical, &options.narrative),
        })
    }
}

/// Title-cases the category row labels.
fn category_table(table: ContingencyTable) -> insight_stats::Result<ContingencyTable> {
    let rows = table.row_labels().iter().map(|label| title_case(label)).collect();
    table.with_row_labels(rows)
}
