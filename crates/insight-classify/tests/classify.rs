#![allow(missing_docs)]

use insight_classify::{apply_rewrites, classify_columns, derive_binary_labels};
use insight_model::{
    ClassifierOptions, ColumnDecision, ColumnProfile, Scalar, SemanticTag, TypeCode, ValueCounts,
};
use polars::prelude::{AnyValue, DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

fn bool_profile(name: &str, t: usize, f: usize) -> ColumnProfile {
    ColumnProfile::from_counts(
        name,
        TypeCode::Bool,
        ValueCounts::new([(Scalar::Bool(true), t), (Scalar::Bool(false), f)]),
    )
}

fn text_profile(name: &str, counts: &[(&str, usize)]) -> ColumnProfile {
    ColumnProfile::from_counts(
        name,
        TypeCode::Cat,
        ValueCounts::new(counts.iter().map(|(v, c)| (Scalar::Text(v.to_string()), *c))),
    )
}

#[test]
fn test_active_and_group_scenario() {
    let profiles = vec![
        bool_profile("active", 600, 400),
        text_profile("group", &[("me", 250), ("spouse", 260), ("friend", 240), ("other", 250)]),
    ];
    let classification = classify_columns(&profiles, &ClassifierOptions::default());
    assert_eq!(classification.bucket(SemanticTag::Binary), ["active"]);
    assert_eq!(classification.bucket(SemanticTag::Categorical), ["group"]);
    assert!(classification.rewrites.is_empty());
}

#[test]
fn test_every_profile_gets_one_decision() {
    let profiles = vec![
        bool_profile("active", 600, 400),
        bool_profile("rare", 990, 10),
        text_profile("nice_person", &[("Y", 500), ("N", 500)]),
        ColumnProfile::from_counts("when", TypeCode::Date, ValueCounts::default()),
        ColumnProfile::from_counts("odd", TypeCode::Other("REJECTED".into()), ValueCounts::default()),
    ];
    let classification = classify_columns(&profiles, &ClassifierOptions::default());
    assert_eq!(classification.tags.len(), profiles.len());
    assert_eq!(classification.excluded().count(), 1);
    assert_eq!(classification.bucket(SemanticTag::Unknown), ["odd"]);
    assert_eq!(classification.buckets.column_count(), 4);
    assert_eq!(classification.rewrites.len(), 1);
    assert!(matches!(
        classification.decision_for("rare"),
        Some(ColumnDecision::Excluded(_))
    ));
}

#[test]
fn test_recoded_text_column_passes_label_check() {
    let profiles = vec![text_profile("nice_person", &[("Y", 40), ("N", 35)])];
    let classification = classify_columns(&profiles, &ClassifierOptions::default());

    let values: Vec<&str> = (0..75).map(|i| if i < 40 { "Y" } else { "N" }).collect();
    let mut df = DataFrame::new(vec![Series::new("nice_person".into(), values).into_column()]).unwrap();
    apply_rewrites(&mut df, &classification.rewrites).unwrap();

    let column = df.column("nice_person").unwrap();
    let mut unique: Vec<Scalar> = (0..df.height())
        .filter_map(|i| Scalar::from_any(column.get(i).unwrap_or(AnyValue::Null)))
        .collect();
    unique.sort();
    unique.dedup();
    let labels = derive_binary_labels("nice_person", &unique).unwrap();
    assert_eq!(labels.negative, "non-nice_person");
}

fn profile_strategy() -> impl Strategy<Value = ColumnProfile> {
    let code = prop_oneof![
        Just(TypeCode::Num),
        Just(TypeCode::Cat),
        Just(TypeCode::Bool),
        Just(TypeCode::Date),
        Just(TypeCode::Const),
    ];
    (
        "[a-z_]{1,10}",
        code,
        prop::collection::vec((0i64..30, 1usize..100), 1..30),
    )
        .prop_map(|(name, code, counts)| {
            let counts = ValueCounts::new(counts.into_iter().map(|(v, c)| (Scalar::Int(v), c)));
            ColumnProfile::from_counts(name, code, counts)
        })
}

proptest! {
    #[test]
    fn classification_is_idempotent_and_exclusive(
        mut profiles in prop::collection::vec(profile_strategy(), 0..12),
        as_ints in any::<bool>(),
    ) {
        for (i, profile) in profiles.iter_mut().enumerate() {
            profile.name = format!("{}_{i}", profile.name);
        }
        let options = ClassifierOptions::default().with_categorical_as_ints(as_ints);
        let first = classify_columns(&profiles, &options);
        let second = classify_columns(&profiles, &options);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.tags.len(), profiles.len());

        for entry in &first.tags {
            let holders = first
                .buckets
                .iter()
                .filter(|(_, names)| names.contains(&entry.column))
                .count();
            prop_assert!(holders <= 1);
        }
    }
}
