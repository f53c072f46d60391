//! Pearson correlation with a two-sided significance test.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::TestResult;
use crate::error::{Result, StatsError};

/// Pearson correlation coefficient of paired samples.
///
/// The returned statistic is `r` (clamped to [-1, 1]); the p-value comes
/// from the t distribution with `n - 2` degrees of freedom.
pub fn pearsonr(x: &[f64], y: &[f64]) -> Result<TestResult> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n = x.len();
    if n < 3 {
        return Err(StatsError::InsufficientData {
            what: "paired observations",
            needed: 3,
            found: n,
        });
    }

    let len = n as f64;
    let mean_x = x.iter().sum::<f64>() / len;
    let mean_y = y.iter().sum::<f64>() / len;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return Err(StatsError::ZeroVariance {
            what: "correlated input",
        });
    }

    let r = (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0);
    if r.abs() == 1.0 {
        return Ok(TestResult::new(r, 0.0));
    }

    let dof = len - 2.0;
    let t = r * (dof / (1.0 - r * r)).sqrt();
    let dist = StudentsT::new(0.0, 1.0, dof).map_err(StatsError::distribution)?;
    Ok(TestResult::new(r, 2.0 * dist.sf(t.abs())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_coefficient() {
        let result = pearsonr(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 1.0, 4.0, 3.0, 5.0]).unwrap();
        assert!((result.statistic - 0.8).abs() < 1e-12);
        assert!((result.p_value - 0.104_088_04).abs() < 1e-6);
    }

    #[test]
    fn perfect_line_has_zero_p_value() {
        let x: Vec<f64> = (0..20).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v - 1.0).collect();
        let result = pearsonr(&x, &y).unwrap();
        assert!((result.statistic - 1.0).abs() < 1e-12);
        assert!(result.p_value < 1e-12);
    }

    #[test]
    fn constant_input_is_degenerate() {
        let err = pearsonr(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, StatsError::ZeroVariance { .. }));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(matches!(
            pearsonr(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
            Err(StatsError::LengthMismatch { left: 3, right: 2 })
        ));
    }
}
