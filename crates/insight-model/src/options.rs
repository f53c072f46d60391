//! Configuration options for classification, narrative and pipeline runs.

use serde::{Deserialize, Serialize};

use crate::error::{InsightError, Result};

/// Options for the semantic classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOptions {
    /// Treat low-cardinality integer columns as categorical or binary.
    pub categorical_as_ints: bool,

    /// Text columns with more distinct values than this are high-cardinality.
    pub high_cardinality_threshold: usize,

    /// Integer columns with fewer distinct values than this may be categorical.
    pub categorical_int_cutoff: usize,

    /// Every group must occur more than this many times to be tested.
    pub min_group_count: usize,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            categorical_as_ints: false,
            high_cardinality_threshold: 25,
            categorical_int_cutoff: 15,
            min_group_count: 30,
        }
    }
}

impl ClassifierOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categorical_as_ints(mut self, enable: bool) -> Self {
        self.categorical_as_ints = enable;
        self
    }

    pub fn with_min_group_count(mut self, count: usize) -> Self {
        self.min_group_count = count;
        self
    }
}

/// Thresholds used when phrasing findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeOptions {
    /// Relative tolerance when comparing coefficients of variation or spreads.
    pub cv_tolerance: f64,

    /// Minimum share difference reported by the frequency-dominance check.
    pub dominance_threshold: f64,

    /// Absolute slope at which crosstab frequencies are called diverging or similar.
    pub slope_threshold: f64,
}

impl Default for NarrativeOptions {
    fn default() -> Self {
        Self {
            cv_tolerance: 0.15,
            dominance_threshold: 0.2,
            slope_threshold: 1.5,
        }
    }
}

/// Options controlling a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Treat low-cardinality integer columns as categorical or binary.
    pub categorical_as_ints: bool,

    /// Emit records for significant pairs only.
    pub only_significant: bool,

    /// Significance level; a pair is significant when `p <= siglvl`.
    pub siglvl: f64,

    /// Minimum group size used by the classifier.
    pub min_samples: usize,

    /// Identifier written to every record's `dataset` column.
    pub dataset_id: String,

    /// Run date written to every record, formatted `%m-%d-%y`.
    pub run_date: String,

    pub narrative: NarrativeOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            categorical_as_ints: false,
            only_significant: false,
            siglvl: 0.05,
            min_samples: 30,
            dataset_id: "custom".to_string(),
            run_date: chrono::Utc::now().format("%m-%d-%y").to_string(),
            narrative: NarrativeOptions::default(),
        }
    }
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categorical_as_ints(mut self, enable: bool) -> Self {
        self.categorical_as_ints = enable;
        self
    }

    pub fn with_only_significant(mut self, enable: bool) -> Self {
        self.only_significant = enable;
        self
    }

    pub fn with_siglvl(mut self, siglvl: f64) -> Self {
        self.siglvl = siglvl;
        self
    }

    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    pub fn with_dataset_id(mut self, dataset_id: impl Into<String>) -> Self {
        self.dataset_id = dataset_id.into();
        self
    }

    pub fn with_run_date(mut self, run_date: impl Into<String>) -> Self {
        self.run_date = run_date.into();
        self
    }

    pub fn with_narrative(mut self, narrative: NarrativeOptions) -> Self {
        self.narrative = narrative;
        self
    }

    /// Classifier options derived from the pipeline settings.
    pub fn classifier(&self) -> ClassifierOptions {
        ClassifierOptions::default()
            .with_categorical_as_ints(self.categorical_as_ints)
            .with_min_group_count(self.min_samples)
    }

    /// Rejects settings that would make every significance decision meaningless.
    pub fn validate(&self) -> Result<()> {
        if !(self.siglvl > 0.0 && self.siglvl < 1.0) {
            return Err(InsightError::config(format!(
                "siglvl must be within (0, 1), got {}",
                self.siglvl
            )));
        }
        if self.narrative.cv_tolerance < 0.0 || self.narrative.dominance_threshold < 0.0 {
            return Err(InsightError::config("narrative tolerances must be non-negative"));
        }
        Ok(())
    }

    /// Returns true when `p_value` counts as significant.
    pub fn is_significant(&self, p_value: f64) -> bool {
        p_value <= self.siglvl
    }
}
