//! Findings comparing the spread of a continuous column across binary groups.

use std::fmt;

use insight_common::title_case;
use insight_model::{BinaryLabels, NarrativeOptions};
use insight_stats::{GroupSummary, is_close};

/// Qualitative level of a coefficient of variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariabilityLevel {
    Low,
    Medium,
    High,
}

impl VariabilityLevel {
    /// `cv <= 0.25` is low, `cv <= 0.75` medium, anything else high.
    pub fn from_cv(cv: f64) -> Self {
        if (0.0..=0.25).contains(&cv) {
            VariabilityLevel::Low
        } else if cv > 0.25 && cv <= 0.75 {
            VariabilityLevel::Medium
        } else {
            VariabilityLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VariabilityLevel::Low => "low",
            VariabilityLevel::Medium => "medium",
            VariabilityLevel::High => "high",
        }
    }
}

impl fmt::Display for VariabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compares the variability of `continuous` between the positive and
/// negative groups of a binary column.
///
/// Coefficients of variation are only meaningful on a ratio scale, so they
/// are used when both group minimums are positive; otherwise the raw
/// standard deviations are compared.
pub fn binary_vs_continuous(
    labels: &BinaryLabels,
    continuous: &str,
    positive: &GroupSummary,
    negative: &GroupSummary,
    options: &NarrativeOptions,
) -> String {
    let pos = title_case(&labels.positive);
    let neg = title_case(&labels.negative);
    let tolerance = options.cv_tolerance;

    if positive.min > 0.0 && negative.min > 0.0 {
        let cv_pos = positive.coefficient_of_variation();
        let cv_neg = negative.coefficient_of_variation();
        if is_close(cv_neg, cv_pos, tolerance) {
            return format!(
                "Both {pos} and {neg} have a {} level of variability on \"{continuous}\". \
                 {pos} average is {:.1} and {neg} average is {:.1}. ",
                VariabilityLevel::from_cv(cv_pos),
                positive.mean,
                negative.mean,
            );
        }
        if cv_pos > cv_neg {
            return format!(
                "{pos} has a higher variability in \"{continuous}\" of {cv_pos:.2} \
                 whereas {neg} is more stable at {cv_neg:.2}. "
            );
        }
        if cv_pos < cv_neg {
            return format!(
                "{neg} has a higher variability in \"{continuous}\" of {cv_neg:.2} \
                 whereas {pos} is more stable at {cv_pos:.2}. "
            );
        }
        return String::new();
    }

    if is_close(positive.std, negative.std, tolerance) {
        return format!(
            "{neg} and {pos} have basically the same spread around their means of {:.2} and {:.2} \
             on \"{continuous}\". ",
            positive.std, negative.std,
        );
    }
    if positive.std > negative.std {
        format!(
            "{pos} has a higher spread (std) in \"{continuous}\" of {:.2} \
             whereas {neg} is more stable at {:.2}. ",
            positive.std, negative.std,
        )
    } else {
        format!(
            "{neg} has a higher spread (std) in \"{continuous}\" of {:.2} \
             whereas {pos} is more stable at {:.2}. ",
            negative.std, positive.std,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(mean: f64, std: f64, min: f64) -> GroupSummary {
        GroupSummary {
            count: 100,
            mean,
            std,
            min,
            max: mean * 2.0,
        }
    }

    fn labels() -> BinaryLabels {
        BinaryLabels::for_column("active")
    }

    #[test]
    fn cv_levels() {
        assert_eq!(VariabilityLevel::from_cv(0.0), VariabilityLevel::Low);
        assert_eq!(VariabilityLevel::from_cv(0.25), VariabilityLevel::Low);
        assert_eq!(VariabilityLevel::from_cv(0.5), VariabilityLevel::Medium);
        assert_eq!(VariabilityLevel::from_cv(0.75), VariabilityLevel::Medium);
        assert_eq!(VariabilityLevel::from_cv(0.9), VariabilityLevel::High);
        assert_eq!(VariabilityLevel::from_cv(f64::NAN), VariabilityLevel::High);
    }

    #[test]
    fn close_cvs_report_same_level() {
        let text = binary_vs_continuous(
            &labels(),
            "visits",
            &group(100.0, 10.0, 50.0),
            &group(80.0, 8.4, 40.0),
            &NarrativeOptions::default(),
        );
        assert_eq!(
            text,
            "Both Active and Non-Active have a low level of variability on \"visits\". \
             Active average is 100.0 and Non-Active average is 80.0. "
        );
    }

    #[test]
    fn higher_positive_cv_is_reported() {
        let text = binary_vs_continuous(
            &labels(),
            "visits",
            &group(100.0, 50.0, 1.0),
            &group(100.0, 10.0, 1.0),
            &NarrativeOptions::default(),
        );
        assert_eq!(
            text,
            "Active has a higher variability in \"visits\" of 0.50 whereas Non-Active is more stable at 0.10. "
        );
    }

    #[test]
    fn non_positive_minimum_falls_back_to_std() {
        let text = binary_vs_continuous(
            &labels(),
            "balance",
            &group(10.0, 2.0, -5.0),
            &group(10.0, 6.0, 1.0),
            &NarrativeOptions::default(),
        );
        assert_eq!(
            text,
            "Non-Active has a higher spread (std) in \"balance\" of 6.00 whereas Active is more stable at 2.00. "
        );

        let same = binary_vs_continuous(
            &labels(),
            "balance",
            &group(10.0, 2.0, 0.0),
            &group(12.0, 2.1, 1.0),
            &NarrativeOptions::default(),
        );
        assert!(same.starts_with("Non-Active and Active have basically the same spread"));
    }
}
