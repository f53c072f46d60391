//! Text helpers used when rendering insight narratives.

/// Title-cases a string: the first letter of every alphabetic run is
/// uppercased and the rest of the run is lowercased.
///
/// Any non-alphabetic character starts a new run, so hyphenated labels
/// become `Non-Active` rather than `Non-active`.
///
/// # Examples
///
/// ```
/// use insight_common::title_case;
///
/// assert_eq!(title_case("non-active"), "Non-Active");
/// assert_eq!(title_case("social media"), "Social Media");
/// assert_eq!(title_case("MIXED case"), "Mixed Case");
/// ```
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Rounds to a fixed number of decimal places.
///
/// ```
/// use insight_common::round_to;
///
/// assert_eq!(round_to(0.123456, 4), 0.1235);
/// assert_eq!(round_to(1.0, 4), 1.0);
/// ```
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
