//! One-way analysis of variance.

use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::TestResult;
use crate::error::{Result, StatsError};

/// One-way ANOVA F-test across two or more groups.
///
/// Every group needs at least two observations, and the pooled
/// within-group variance must be non-zero.
pub fn f_oneway(groups: &[Vec<f64>]) -> Result<TestResult> {
    if groups.len() < 2 {
        return Err(StatsError::InsufficientData {
            what: "groups",
            needed: 2,
            found: groups.len(),
        });
    }
    if let Some(small) = groups.iter().find(|g| g.len() < 2) {
        return Err(StatsError::InsufficientData {
            what: "observations per group",
            needed: 2,
            found: small.len(),
        });
    }

    let k = groups.len() as f64;
    let n: usize = groups.iter().map(Vec::len).sum();
    let n = n as f64;
    let grand_mean = groups.iter().flatten().sum::<f64>() / n;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for group in groups {
        let size = group.len() as f64;
        let mean = group.iter().sum::<f64>() / size;
        ss_between += size * (mean - grand_mean).powi(2);
        ss_within += group.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    }
    if ss_within == 0.0 {
        return Err(StatsError::ZeroVariance {
            what: "within groups",
        });
    }

    let df_between = k - 1.0;
    let df_within = n - k;
    let f = (ss_between / df_between) / (ss_within / df_within);
    let dist = FisherSnedecor::new(df_between, df_within).map_err(StatsError::distribution)?;
    Ok(TestResult::new(f, dist.sf(f)))
}
