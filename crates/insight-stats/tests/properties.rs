#![allow(missing_docs)]

use insight_stats::{
    ContingencyTable, GroupSummary, TestResult, chi2_contingency, f_oneway, pearsonr,
    ttest_ind_from_stats,
};
use proptest::prelude::*;

fn sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1_000.0f64..1_000.0, 3..40)
}

proptest! {
    #[test]
    fn pearson_p_value_is_a_probability(x in sample(), seed in any::<u64>()) {
        let y: Vec<f64> = x
            .iter()
            .enumerate()
            .map(|(i, v)| v * 0.5 + ((seed.wrapping_add(i as u64) % 97) as f64))
            .collect();
        if let Ok(result) = pearsonr(&x, &y) {
            prop_assert!((0.0..=1.0).contains(&result.p_value));
            prop_assert!((-1.0..=1.0).contains(&result.statistic));
        }
    }

    #[test]
    fn anova_p_value_is_a_probability(a in sample(), b in sample(), c in sample()) {
        if let Ok(result) = f_oneway(&[a, b, c]) {
            prop_assert!((0.0..=1.0).contains(&result.p_value));
            prop_assert!(result.statistic >= 0.0);
        }
    }

    #[test]
    fn ttest_p_value_is_a_probability(a in sample(), b in sample()) {
        let first = GroupSummary::from_values(&a).unwrap();
        let second = GroupSummary::from_values(&b).unwrap();
        if let Ok(result) = ttest_ind_from_stats(&first, &second) {
            prop_assert!((0.0..=1.0).contains(&result.p_value));
        }
    }

    #[test]
    fn chi2_p_value_is_a_probability(
        cells in prop::collection::vec(prop::collection::vec(1u32..500, 2..5), 2..6)
    ) {
        let width = cells[0].len();
        let cells: Vec<Vec<f64>> = cells
            .into_iter()
            .map(|row| row.into_iter().cycle().take(width).map(f64::from).collect())
            .collect();
        let rows = (0..cells.len()).map(|i| i.to_string()).collect();
        let cols = (0..width).map(|i| i.to_string()).collect();
        let table = ContingencyTable::new(rows, cols, cells).unwrap();
        let outcome = chi2_contingency(&table).unwrap();
        prop_assert!((0.0..=1.0).contains(&outcome.p_value));
        prop_assert!(outcome.statistic >= 0.0);
    }

    #[test]
    fn significance_matches_threshold(p in 0.0f64..1.0, siglvl in 0.001f64..0.999) {
        let result = TestResult::new(1.0, p);
        prop_assert_eq!(result.is_significant(siglvl), p <= siglvl);
    }
}

#[test]
fn nan_p_value_is_not_significant() {
    let result = TestResult::new(f64::NAN, f64::NAN);
    assert_eq!(result.p_value, 1.0);
    assert!(!result.is_significant(0.05));
}
