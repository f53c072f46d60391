//! Findings from a categorical-by-binary frequency table.

use insight_common::{format_numeric, title_case};
use insight_model::NarrativeOptions;
use insight_stats::{ContingencyTable, linear_slope};

/// Position of the first maximum (or minimum) of a column.
fn arg_extreme(values: &[f64], better: impl Fn(f64, f64) -> bool) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, value) in values.iter().enumerate() {
        match best {
            Some(current) if !better(*value, values[current]) => {}
            _ => best = Some(idx),
        }
    }
    best
}

pub(crate) fn arg_max(values: &[f64]) -> Option<usize> {
    arg_extreme(values, |candidate, current| candidate > current)
}

fn arg_min(values: &[f64]) -> Option<usize> {
    arg_extreme(values, |candidate, current| candidate < current)
}

/// Describes how the two binary groups spread over the categories.
///
/// `table` has one row per category and exactly two columns: the negative
/// label first, then the positive label. Ties resolve to the first row.
/// Returns an empty string when nothing stands out.
pub fn binary_vs_categorical(
    table: &ContingencyTable,
    categorical: &str,
    options: &NarrativeOptions,
) -> String {
    let (Some(first), Some(second)) = (table.column(0), table.column(1)) else {
        return String::new();
    };
    let (Some(first_max), Some(second_max), Some(first_min), Some(second_min)) = (
        arg_max(&first),
        arg_max(&second),
        arg_min(&first),
        arg_min(&second),
    ) else {
        return String::new();
    };

    let labels = table.col_labels();
    let rows = table.row_labels();
    let (a, b) = (&labels[0], &labels[1]);
    let (a_title, b_title) = (title_case(a), title_case(b));
    let mut insights = String::new();

    if let Some(row) = first.iter().zip(&second).position(|(x, y)| x == y) {
        insights.push_str(&format!(
            "Both {a} and {b} have a value of {} for {}. ",
            format_numeric(first[row]),
            rows[row]
        ));
    }

    if first_max == second_max {
        insights.push_str(&format!(
            "{} is the top category for both {a} at {} and {b} at {} for \"{categorical}\". ",
            rows[first_max],
            format_numeric(first[first_max]),
            format_numeric(second[second_max]),
        ));
    }

    if first_max == second_min {
        let category = &rows[first_max];
        insights.push_str(&format!(
            "{a_title} and {b_title} are the farthest apart on \"{category}\" in \"{categorical}\". \
             {a_title} maximum on {category} is {} and {b} minimum is on {category} at {}. ",
            format_numeric(first[first_max]),
            format_numeric(second[second_min]),
        ));
    }

    if second_max == first_min {
        let category = &rows[second_max];
        insights.push_str(&format!(
            "{b_title} and {a_title} are the farthest apart on \"{category}\" in \"{categorical}\". \
             {b_title} maximum on {category} is {} and {a} minimum is on {category} at {}. ",
            format_numeric(second[second_max]),
            format_numeric(first[first_min]),
        ));
    }

    // Slopes strictly between the thresholds say nothing.
    if let Some(slope) = linear_slope(&first, &second) {
        if slope <= -options.slope_threshold {
            insights.push_str(&format!(
                "{b_title} and {a_title} seem to have diverging frequencies. "
            ));
        } else if slope >= options.slope_threshold {
            insights.push_str(&format!(
                "{b_title} and {a_title} seem to have similar frequencies. "
            ));
        }
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&str], cells: Vec<Vec<f64>>) -> ContingencyTable {
        ContingencyTable::new(
            rows.iter().map(ToString::to_string).collect(),
            vec!["non-active".to_string(), "active".to_string()],
            cells,
        )
        .unwrap()
    }

    #[test]
    fn argmax_prefers_first_row_on_ties() {
        assert_eq!(arg_max(&[1.0, 3.0, 3.0]), Some(1));
        assert_eq!(arg_min(&[2.0, 1.0, 1.0]), Some(1));
        assert_eq!(arg_max(&[]), None);
    }

    #[test]
    fn reports_equal_counts_and_shared_top() {
        let xtab = table(
            &["Friend", "Me", "Other"],
            vec![vec![40.0, 40.0], vec![90.0, 120.0], vec![60.0, 55.0]],
        );
        let text = binary_vs_categorical(&xtab, "buyer_type", &NarrativeOptions::default());
        assert!(text.starts_with("Both non-active and active have a value of 40 for Friend. "));
        assert!(text.contains(
            "Me is the top category for both non-active at 90 and active at 120 for \"buyer_type\". "
        ));
    }

    #[test]
    fn reports_farthest_apart() {
        let xtab = table(&["A", "B"], vec![vec![80.0, 5.0], vec![20.0, 100.0]]);
        let text = binary_vs_categorical(&xtab, "kind", &NarrativeOptions::default());
        assert!(text.contains(
            "Non-Active and Active are the farthest apart on \"A\" in \"kind\". \
             Non-Active maximum on A is 80 and active minimum is on A at 5. "
        ));
        assert!(text.contains(
            "Active and Non-Active are the farthest apart on \"B\" in \"kind\". \
             Active maximum on B is 100 and non-active minimum is on B at 20. "
        ));
        assert!(text.ends_with("Active and Non-Active seem to have diverging frequencies. "));
    }

    #[test]
    fn moderate_slope_adds_nothing() {
        let xtab = table(&["A", "B", "C"], vec![vec![10.0, 12.0], vec![20.0, 21.0], vec![30.0, 33.0]]);
        let text = binary_vs_categorical(&xtab, "kind", &NarrativeOptions::default());
        assert!(!text.contains("frequencies"));
    }
}
