//! The insight record: one row of the output table.

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisKind, StatTest};

/// A finding produced for one tested column pair.
///
/// Field names serialize to the flat output table columns
/// `date, dataset, insight_text, p_val, magnitude, col_1, col_2, analysis, analysis_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRecord {
    pub date: String,
    #[serde(rename = "dataset")]
    pub dataset_id: String,
    pub insight_text: String,
    /// Rounded to four decimal places.
    #[serde(rename = "p_val")]
    pub p_value: f64,
    /// Correlation coefficient for `cont X cont`; null otherwise.
    pub magnitude: Option<f64>,
    #[serde(rename = "col_1")]
    pub column_1: String,
    #[serde(rename = "col_2")]
    pub column_2: String,
    #[serde(rename = "analysis")]
    pub test: StatTest,
    #[serde(rename = "analysis_type")]
    pub analysis_kind: AnalysisKind,
    /// Raw test statistic (chi2, t, F or r).
    pub statistic: f64,
}

impl InsightRecord {
    /// Returns true when the record's p-value is at or below `siglvl`.
    pub fn is_significant(&self, siglvl: f64) -> bool {
        self.p_value <= siglvl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> InsightRecord {
        InsightRecord {
            date: "01-02-26".to_string(),
            dataset_id: "custom".to_string(),
            insight_text: "Significant difference.".to_string(),
            p_value: 0.0123,
            magnitude: None,
            column_1: "active".to_string(),
            column_2: "group".to_string(),
            test: StatTest::ChiSquare,
            analysis_kind: AnalysisKind::BinCat,
            statistic: 12.5,
        }
    }

    #[test]
    fn record_serializes_with_table_column_names() {
        let json = serde_json::to_value(record()).expect("serialize record");
        assert_eq!(json["dataset"], "custom");
        assert_eq!(json["p_val"], 0.0123);
        assert_eq!(json["col_1"], "active");
        assert_eq!(json["analysis"], "Chi-square");
        assert_eq!(json["analysis_type"], "bin X cat");
        assert!(json["magnitude"].is_null());
    }

    #[test]
    fn record_significance_is_inclusive() {
        let rec = record();
        assert!(rec.is_significant(0.0123));
        assert!(!rec.is_significant(0.01));
    }
}
