//! `bin X bin`: chi-square test on the 2x2 table of two binary columns.

use insight_classify::derive_binary_labels;
use insight_model::{AnalysisKind, BinaryLabels, PairCandidate, PipelineOptions, Result};
use insight_narrative::{LabelBuckets, column_dominance, significance};
use insight_stats::{ContingencyTable, chi2_contingency};
use polars::prelude::DataFrame;
use tracing::debug;

use super::analyzer_trait::{PairAnalysis, PairAnalyzer, degenerate};
use crate::frame::{binary_column, unique_scalars};

const FIRST_LABELS: &str = "bin1_labels";
const SECOND_LABELS: &str = "bin2_labels";

pub struct BinaryBinaryAnalyzer;

impl PairAnalyzer for BinaryBinaryAnalyzer {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::BinBin
    }

    fn description(&self) -> &'static str {
        "Chi-square test of independence between two binary columns"
    }

    fn analyze(
        &self,
        df: &DataFrame,
        pair: &PairCandidate,
        options: &PipelineOptions,
    ) -> Result<PairAnalysis> {
        let (first, second) = (pair.first.as_str(), pair.second.as_str());
        let first_labels = derive_binary_labels(first, &unique_scalars(df, first)?)?;
        let second_labels = derive_binary_labels(second, &unique_scalars(df, second)?)?;

        let observations = binary_column(df, first)?
            .into_iter()
            .zip(binary_column(df, second)?)
            .filter_map(|row| match row {
                (Some(a), Some(b)) => Some((a, b)),
                _ => None,
            });
        let table = ContingencyTable::crosstab(observations)
            .with_row_labels(label_vec(&first_labels))
            .and_then(|table| table.with_col_labels(label_vec(&second_labels)))
            .map_err(|err| degenerate(first, err))?;

        let outcome = chi2_contingency(&table).map_err(|err| degenerate(second, err))?;
        let buckets = LabelBuckets::from([
            (FIRST_LABELS.to_string(), label_vec(&first_labels)),
            (SECOND_LABELS.to_string(), label_vec(&second_labels)),
        ]);
        let threshold = options.narrative.dominance_threshold;
        let mut narrative = dominance(&table.normalize_columns(), &buckets, SECOND_LABELS, threshold);
        narrative.push_str(&dominance(
            &table.normalize_rows().transpose(),
            &buckets,
            FIRST_LABELS,
            threshold,
        ));

        Ok(PairAnalysis {
            result: outcome.result(),
            magnitude: None,
            headline: Some(significance::binary_vs_binary(&first_labels, &second_labels)),
            narrative,
        })
    }
}

fn label_vec(labels: &BinaryLabels) -> Vec<String> {
    vec![labels.negative.clone(), labels.positive.clone()]
}

/// A missing bucket or column contributes no findings.
fn dominance(table: &ContingencyTable, buckets: &LabelBuckets, bucket: &str, threshold: f64) -> String {
    column_dominance(table, buckets, bucket, threshold).unwrap_or_else(|err| {
        debug!(bucket, error = %err, "no dominance findings");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_bucket_adds_no_text() {
        let table = ContingencyTable::new(
            vec!["non-a".to_string(), "a".to_string()],
            vec!["non-b".to_string(), "b".to_string()],
            vec![vec![0.9, 0.1], vec![0.1, 0.9]],
        )
        .unwrap();
        let buckets = LabelBuckets::from([(SECOND_LABELS.to_string(), vec!["non-b".to_string()])]);
        assert_eq!(dominance(&table, &buckets, FIRST_LABELS, 0.2), "");
        assert_eq!(
            dominance(&table, &buckets, SECOND_LABELS, 0.2),
            "'Non-A' rows have 80.0% of 'non-b'. "
        );
    }
}
