//! `cat X cont`: one-way ANOVA of a continuous column across categories.

use std::collections::BTreeMap;

use insight_model::{AnalysisKind, PairCandidate, PipelineOptions, Result, Scalar};
use insight_narrative::{categorical_vs_continuous, significance};
use insight_stats::f_oneway;
use polars::prelude::DataFrame;

use super::analyzer_trait::{PairAnalysis, PairAnalyzer, degenerate};
use crate::frame::{float_column, scalar_column};

pub struct CategoricalContinuousAnalyzer;

impl PairAnalyzer for CategoricalContinuousAnalyzer {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::CatCont
    }

    fn description(&self) -> &'static str {
        "One-way ANOVA across the groups of a categorical column"
    }

    fn analyze(
        &self,
        df: &DataFrame,
        pair: &PairCandidate,
        _options: &PipelineOptions,
    ) -> Result<PairAnalysis> {
        let (categorical, continuous) = (pair.first.as_str(), pair.second.as_str());
        let groups = partition(
            scalar_column(df, categorical)?,
            float_column(df, continuous)?,
        );
        let result = f_oneway(&groups).map_err(|err| degenerate(categorical, err))?;

        Ok(PairAnalysis {
            result,
            magnitude: None,
            headline: Some(significance::categorical_vs_continuous(categorical, continuous)),
            narrative: categorical_vs_continuous(),
        })
    }
}

/// Groups values by category in first-appearance order, skipping rows with
/// a null on either side.
fn partition(categories: Vec<Option<Scalar>>, values: Vec<Option<f64>>) -> Vec<Vec<f64>> {
    let mut index: BTreeMap<Scalar, usize> = BTreeMap::new();
    let mut groups: Vec<Vec<f64>> = Vec::new();
    for (category, value) in categories.into_iter().zip(values) {
        let (Some(category), Some(value)) = (category, value) else {
            continue;
        };
        let slot = *index.entry(category).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(value);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_keeps_first_appearance_order() {
        let categories = vec![
            Some(Scalar::Text("b".into())),
            Some(Scalar::Text("a".into())),
            None,
            Some(Scalar::Text("b".into())),
            Some(Scalar::Text("a".into())),
        ];
        let values = vec![Some(1.0), Some(2.0), Some(3.0), None, Some(5.0)];
        assert_eq!(partition(categories, values), vec![vec![1.0], vec![2.0, 5.0]]);
    }
}
