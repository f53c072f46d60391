//! Ordered classification rules from column profile to semantic tag.
//!
//! Rules are evaluated top to bottom and the first match wins:
//!
//! 1. **Profiler verdicts**: `UNIQUE`, `DATE`, `CONST` and `CORR` map directly.
//! 2. **Numeric columns**: integers may be read as categorical or binary
//!    when `categorical_as_ints` is set; otherwise numbers are continuous
//!    unless they look like an identifier.
//! 3. **Text columns**: unique text is an identifier, wide text is
//!    high-cardinality, two well-populated values are binary (with a dummy
//!    recoding), several well-populated values are categorical.
//! 4. **Booleans** are binary when the minority class is large enough.
//! 5. Anything else is `unknown`.

use std::sync::LazyLock;

use insight_model::{
    ClassifierOptions, ColumnDecision, ColumnProfile, ExclusionReason, Scalar, SemanticTag,
    TypeCode,
};
use regex::Regex;

use crate::recode::ColumnRewrite;

/// Column names that look like identifiers, matched from the start of the name.
static IDENTIFIER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(?:\w*ID|\w*Id|\w*_ID|\w*_Id|\w*_id|account)")
        .expect("Invalid identifier regex")
});

/// The outcome for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnOutcome {
    pub decision: ColumnDecision,
    pub rewrite: Option<ColumnRewrite>,
}

impl ColumnOutcome {
    fn tagged(tag: SemanticTag) -> Self {
        Self {
            decision: ColumnDecision::Tagged(tag),
            rewrite: None,
        }
    }

    fn excluded(reason: ExclusionReason) -> Self {
        Self {
            decision: ColumnDecision::Excluded(reason),
            rewrite: None,
        }
    }
}

/// Returns true when the column name matches the identifier heuristic.
pub fn looks_like_identifier(name: &str) -> bool {
    IDENTIFIER_NAME.is_match(name)
}

/// Returns true when the values are integers forming a gap-free run.
///
/// `[3, 1, 2]` is contiguous; `[1, 3]` and any non-integer input are not.
pub fn is_contiguous<'a>(values: impl IntoIterator<Item = &'a Scalar>) -> bool {
    let ints: Option<Vec<i64>> = values
        .into_iter()
        .map(|v| match v {
            Scalar::Int(_) | Scalar::Float(_) => v.as_i64(),
            _ => None,
        })
        .collect();
    let Some(mut ints) = ints else {
        return false;
    };
    if ints.is_empty() {
        return false;
    }
    ints.sort_unstable();
    ints.windows(2).all(|pair| pair[0].checked_add(1) == Some(pair[1]))
}

/// Classifies a single column profile.
pub fn classify_column(profile: &ColumnProfile, options: &ClassifierOptions) -> ColumnOutcome {
    match &profile.type_code {
        TypeCode::Unique => ColumnOutcome::tagged(SemanticTag::UniqueIdentifier),
        TypeCode::Date => ColumnOutcome::tagged(SemanticTag::Date),
        TypeCode::Const => ColumnOutcome::tagged(SemanticTag::Constant),
        TypeCode::Corr => ColumnOutcome::tagged(SemanticTag::HighlyCorrelated),
        TypeCode::Num => classify_numeric(profile, options),
        TypeCode::Cat => classify_text(profile, options),
        TypeCode::Bool => classify_boolean(profile, options),
        TypeCode::Other(_) => ColumnOutcome::tagged(SemanticTag::Unknown),
    }
}

fn classify_numeric(profile: &ColumnProfile, options: &ClassifierOptions) -> ColumnOutcome {
    let counts = &profile.value_counts;
    if options.categorical_as_ints {
        if profile.distinct_count < options.categorical_int_cutoff && is_contiguous(counts.values()) {
            return ColumnOutcome::tagged(SemanticTag::Categorical);
        }
        if profile.distinct_count == 2
            && counts.len() == 2
            && counts.min_count().is_some_and(|c| c > options.min_group_count)
        {
            return ColumnOutcome::tagged(SemanticTag::Binary);
        }
        return ColumnOutcome::tagged(SemanticTag::Continuous);
    }

    if profile.is_unique && looks_like_identifier(&profile.name) {
        ColumnOutcome::tagged(SemanticTag::UniqueIdentifier)
    } else {
        ColumnOutcome::tagged(SemanticTag::Continuous)
    }
}

fn classify_text(profile: &ColumnProfile, options: &ClassifierOptions) -> ColumnOutcome {
    let counts = &profile.value_counts;
    let well_populated = counts.min_count().is_some_and(|c| c > options.min_group_count);

    if profile.is_unique && profile.mode_is_text() {
        return ColumnOutcome::tagged(SemanticTag::UniqueIdentifier);
    }
    if profile.distinct_count > options.high_cardinality_threshold {
        return ColumnOutcome::tagged(SemanticTag::HighCardinality);
    }
    if profile.distinct_count == 2 && counts.len() == 2 {
        if !well_populated {
            return ColumnOutcome::excluded(ExclusionReason::SparseCategory);
        }
        let mut values: Vec<String> = counts.values().map(ToString::to_string).collect();
        values.sort();
        let rewrite = ColumnRewrite::DummyEncode {
            column: profile.name.clone(),
            negative: values[0].clone(),
            positive: values[1].clone(),
        };
        return ColumnOutcome {
            decision: ColumnDecision::Tagged(SemanticTag::Binary),
            rewrite: Some(rewrite),
        };
    }
    if counts.len() > 1 && well_populated {
        return ColumnOutcome::tagged(SemanticTag::Categorical);
    }
    ColumnOutcome::excluded(ExclusionReason::SparseCategory)
}

fn classify_boolean(profile: &ColumnProfile, options: &ClassifierOptions) -> ColumnOutcome {
    if profile
        .value_counts
        .min_count()
        .is_some_and(|c| c > options.min_group_count)
    {
        ColumnOutcome::tagged(SemanticTag::Binary)
    } else {
        ColumnOutcome::excluded(ExclusionReason::SmallMinorityClass)
    }
}
