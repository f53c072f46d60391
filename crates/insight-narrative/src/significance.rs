//! Lead sentences stating that a pair differs significantly.

use insight_model::BinaryLabels;

pub fn binary_vs_categorical(labels: &BinaryLabels, categorical: &str) -> String {
    format!(
        "Significant difference in '{}' and '{}' between '{categorical}' groups. ",
        labels.negative, labels.positive
    )
}

pub fn binary_vs_binary(first: &BinaryLabels, second: &BinaryLabels) -> String {
    format!(
        "Significant difference in the '{}' and '{}' groups when comparing to '{}' and '{}' groups. ",
        first.negative, first.positive, second.negative, second.positive
    )
}

pub fn binary_vs_continuous(labels: &BinaryLabels, continuous: &str) -> String {
    format!(
        "Significant difference in \"{}\" and \"{}\" in \"{continuous}\". ",
        labels.negative, labels.positive
    )
}

pub fn categorical_vs_continuous(categorical: &str, continuous: &str) -> String {
    format!("Significant difference across groups in \"{categorical}\" in \"{continuous}\". ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_name_both_groups() {
        let active = BinaryLabels::for_column("active");
        assert_eq!(
            binary_vs_categorical(&active, "group"),
            "Significant difference in 'non-active' and 'active' between 'group' groups. "
        );
        assert_eq!(
            binary_vs_continuous(&active, "visits"),
            "Significant difference in \"non-active\" and \"active\" in \"visits\". "
        );
        assert_eq!(
            categorical_vs_continuous("group", "visits"),
            "Significant difference across groups in \"group\" in \"visits\". "
        );
        let nice = BinaryLabels::for_column("nice");
        assert!(binary_vs_binary(&active, &nice).contains("comparing to 'non-nice' and 'nice'"));
    }
}
