//! Two-sample t-test computed from group summaries.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::TestResult;
use crate::describe::GroupSummary;
use crate::error::{Result, StatsError};

/// Independent two-sample t-test with pooled (equal) variance.
///
/// The statistic is signed `first - second`; the p-value is two-sided.
pub fn ttest_ind_from_stats(first: &GroupSummary, second: &GroupSummary) -> Result<TestResult> {
    for group in [first, second] {
        if group.count < 2 {
            return Err(StatsError::InsufficientData {
                what: "observations per group",
                needed: 2,
                found: group.count,
            });
        }
    }

    let n1 = first.count as f64;
    let n2 = second.count as f64;
    let dof = n1 + n2 - 2.0;
    let pooled = ((n1 - 1.0) * first.variance() + (n2 - 1.0) * second.variance()) / dof;
    let denom = (pooled * (1.0 / n1 + 1.0 / n2)).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return Err(StatsError::ZeroVariance {
            what: "pooled groups",
        });
    }

    let t = (first.mean - second.mean) / denom;
    let dist = StudentsT::new(0.0, 1.0, dof).map_err(StatsError::distribution)?;
    let p_value = 2.0 * dist.sf(t.abs());
    Ok(TestResult::new(t, p_value))
}
