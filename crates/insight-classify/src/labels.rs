//! Binary label derivation.

use insight_model::{BinaryLabels, InsightError, Result, Scalar};

/// Derives group labels for a binary column from its distinct values.
///
/// Succeeds when the column holds exactly two boolean values, or exactly two
/// integer values that sum to one. The labels negate the column name:
/// `active` yields `non-active` / `active`.
pub fn derive_binary_labels(column: &str, unique_values: &[Scalar]) -> Result<BinaryLabels> {
    if is_boolean_pair(unique_values) || is_zero_one_pair(unique_values) {
        return Ok(BinaryLabels::for_column(column));
    }
    let mut values: Vec<String> = unique_values.iter().map(ToString::to_string).collect();
    values.sort();
    Err(InsightError::NotBinary {
        column: column.to_string(),
        values,
    })
}

fn is_boolean_pair(values: &[Scalar]) -> bool {
    values.len() == 2 && values.iter().all(|v| matches!(v, Scalar::Bool(_))) && values[0] != values[1]
}

fn is_zero_one_pair(values: &[Scalar]) -> bool {
    if values.len() != 2 {
        return false;
    }
    let ints: Option<Vec<i64>> = values
        .iter()
        .map(|v| match v {
            Scalar::Int(_) | Scalar::Float(_) => v.as_i64(),
            _ => None,
        })
        .collect();
    ints.is_some_and(|ints| ints[0] != ints[1] && ints[0].checked_add(ints[1]) == Some(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_produce_negated_labels() {
        let labels =
            derive_binary_labels("active", &[Scalar::Bool(false), Scalar::Bool(true)]).unwrap();
        assert_eq!(labels.negative, "non-active");
        assert_eq!(labels.positive, "active");
    }

    #[test]
    fn zero_one_integers_are_binary() {
        assert!(derive_binary_labels("nice_person", &[Scalar::Int(1), Scalar::Int(0)]).is_ok());
        assert!(derive_binary_labels("flag", &[Scalar::Float(0.0), Scalar::Float(1.0)]).is_ok());
    }

    #[test]
    fn other_values_are_rejected_with_their_values() {
        let err = derive_binary_labels("visits", &[Scalar::Int(1), Scalar::Int(2)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "visits not a binary variable? Unique values are: [1, 2]"
        );
        assert!(derive_binary_labels("kind", &[Scalar::Text("Y".into()), Scalar::Text("N".into())]).is_err());
        assert!(derive_binary_labels("one", &[Scalar::Int(1)]).is_err());
        assert!(derive_binary_labels("mixed", &[Scalar::Bool(true), Scalar::Int(0)]).is_err());
    }

    #[test]
    fn extreme_integers_are_rejected_without_overflow() {
        assert!(derive_binary_labels("big", &[Scalar::Int(i64::MAX), Scalar::Int(1)]).is_err());
        assert!(derive_binary_labels("low", &[Scalar::Int(i64::MIN), Scalar::Int(-1)]).is_err());
        assert!(derive_binary_labels("pair", &[Scalar::Int(2), Scalar::Int(-1)]).is_err());
    }
}
