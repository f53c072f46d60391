//! Findings for a categorical column against a continuous one.

/// Placeholder narrative. Group-level findings for this pairing are not
/// modelled yet; only the significance sentence carries information.
pub fn categorical_vs_continuous() -> String {
    "Coming soon".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_text() {
        assert_eq!(categorical_vs_continuous(), "Coming soon");
    }
}
