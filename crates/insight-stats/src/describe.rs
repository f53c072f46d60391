//! Descriptive statistics for a group of observations.

/// Summary of one group, as used by the variability narrative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1); NaN for a single observation.
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl GroupSummary {
    /// Summarizes the finite values of a group. Returns `None` when the group
    /// has no finite values.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }
        let count = finite.len();
        let mean = finite.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let ss: f64 = finite.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };
        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            count,
            mean,
            std,
            min,
            max,
        })
    }

    /// Coefficient of variation (`std / mean`).
    pub fn coefficient_of_variation(&self) -> f64 {
        self.std / self.mean
    }

    pub fn variance(&self) -> f64 {
        self.std * self.std
    }
}

/// Relative closeness test: `|a - b| <= atol + rtol * |b|` with `atol = 1e-8`.
///
/// Asymmetric: the tolerance scales with `b`.
pub fn is_close(a: f64, b: f64, rtol: f64) -> bool {
    const ATOL: f64 = 1e-8;
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    (a - b).abs() <= ATOL + rtol * b.abs()
}
