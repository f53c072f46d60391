//! Turns a pair analysis into an insight record.

use insight_common::round_to;
use insight_model::{InsightRecord, PairCandidate, PipelineOptions};

use crate::analyzers::PairAnalysis;

/// Applies the significance policy and assembles the record.
///
/// The text is the headline (when significant) followed by the narrative.
/// Returns `None` when `only_significant` filters the pair out or when
/// there is nothing to say.
pub fn build_record(
    pair: &PairCandidate,
    analysis: &PairAnalysis,
    options: &PipelineOptions,
) -> Option<InsightRecord> {
    let significant = options.is_significant(analysis.result.p_value);
    if options.only_significant && !significant {
        return None;
    }

    let mut text = String::new();
    if significant && let Some(headline) = &analysis.headline {
        text.push_str(headline);
    }
    text.push_str(&analysis.narrative);
    if text.is_empty() {
        return None;
    }

    Some(InsightRecord {
        date: options.run_date.clone(),
        dataset_id: options.dataset_id.clone(),
        insight_text: text,
        p_value: round_to(analysis.result.p_value, 4),
        magnitude: analysis.magnitude,
        column_1: pair.first.clone(),
        column_2: pair.second.clone(),
        test: pair.kind.test(),
        analysis_kind: pair.kind,
        statistic: analysis.result.statistic,
    })
}
