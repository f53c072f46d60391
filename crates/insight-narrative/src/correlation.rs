//! Findings for a pair of continuous columns.

use std::fmt;

/// Qualitative bucket of a Pearson coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationStrength {
    StrongPositive,
    StrongNegative,
    Weak,
}

impl CorrelationStrength {
    /// Buckets `coef`; coefficients in the gaps between buckets have no label.
    pub fn classify(coef: f64) -> Option<Self> {
        if coef >= 0.4 {
            Some(CorrelationStrength::StrongPositive)
        } else if coef < -0.4 {
            Some(CorrelationStrength::StrongNegative)
        } else if (-0.2..=0.2).contains(&coef) {
            Some(CorrelationStrength::Weak)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CorrelationStrength::StrongPositive => "strong positive",
            CorrelationStrength::StrongNegative => "strong negative",
            CorrelationStrength::Weak => "weak",
        }
    }
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strength phrase followed by the trend sentence.
pub fn continuous_vs_continuous(first: &str, second: &str, coef: f64, significant: bool) -> String {
    let mut text = match CorrelationStrength::classify(coef) {
        Some(strength) => {
            format!("{first} and {second} have {strength} correlation of {coef:.2}. ")
        }
        None => String::new(),
    };

    if !significant {
        text.push_str(&format!(
            "Not likely a linear relationship between {first} and {second} with coef of {coef:.2}. "
        ));
        return text;
    }

    let trend = if coef <= -0.35 {
        format!("As {first} increases {second} decreases with coef of {coef:.2}. ")
    } else if coef <= 0.35 {
        format!("{first} and {second} show little linear relationship with coef of {coef:.2}. ")
    } else if coef <= 0.75 {
        format!("As {first} increases {second} increases with coef of {coef:.2}. ")
    } else {
        format!("{first} increases nearly linearly with respect to {second}. ")
    };
    text.push_str(&trend);
    text
}
