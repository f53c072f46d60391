#![allow(missing_docs)]

use insight_model::{
    AnalysisKind, BucketMap, CandidateSet, ColumnProfile, InsightRecord, PairCandidate,
    PipelineOptions, Scalar, SemanticTag, StatTest, TypeCode, ValueCounts,
};

#[test]
fn test_profile_from_bool_counts() {
    let profile = ColumnProfile::from_counts(
        "active",
        TypeCode::Bool,
        ValueCounts::new([(Scalar::Bool(true), 600), (Scalar::Bool(false), 400)]),
    );
    assert_eq!(profile.distinct_count, 2);
    assert!(!profile.is_unique);
    assert_eq!(profile.mode, Some(Scalar::Bool(true)));
    assert_eq!(profile.value_counts.min_count(), Some(400));
}

#[test]
fn test_bucket_map_serializes_by_tag_name() {
    let buckets: BucketMap = [
        (SemanticTag::Binary, "active".to_string()),
        (SemanticTag::Categorical, "group".to_string()),
    ]
    .into_iter()
    .collect();
    let json = serde_json::to_value(&buckets).expect("serialize buckets");
    assert_eq!(json["buckets"]["binary"][0], "active");
    assert_eq!(json["buckets"]["categorical"][0], "group");
}

#[test]
fn test_candidate_set_counts_cover_every_kind() {
    let mut set = CandidateSet::new();
    set.push(PairCandidate::new(AnalysisKind::BinCont, "active", "visits"));
    let counts = set.counts();
    assert_eq!(counts.len(), AnalysisKind::ALL.len());
    assert_eq!(counts[2], (AnalysisKind::BinCont, 1));
    assert!(counts.iter().filter(|(_, n)| *n == 0).count() == 4);
}

#[test]
fn test_kind_maps_to_test_family() {
    assert_eq!(AnalysisKind::BinBin.test(), StatTest::ChiSquare);
    assert_eq!(AnalysisKind::BinCont.test(), StatTest::TTest);
    assert_eq!(AnalysisKind::CatCont.test(), StatTest::Anova);
    assert_eq!(AnalysisKind::ContCont.test(), StatTest::Pearson);
    assert!(AnalysisKind::ContCont.is_symmetric());
    assert!(!AnalysisKind::BinCat.is_symmetric());
}

#[test]
fn test_record_round_trips_through_json() {
    let record = InsightRecord {
        date: "03-14-26".to_string(),
        dataset_id: "random".to_string(),
        insight_text: "x increases nearly linearly with respect to y. ".to_string(),
        p_value: 0.0,
        magnitude: Some(1.0),
        column_1: "x".to_string(),
        column_2: "y".to_string(),
        test: StatTest::Pearson,
        analysis_kind: AnalysisKind::ContCont,
        statistic: 1.0,
    };
    let json = serde_json::to_string(&record).expect("serialize record");
    let round: InsightRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn test_options_serialize() {
    let options = PipelineOptions::default()
        .with_dataset_id("sales")
        .with_run_date("01-01-26");
    let json = serde_json::to_string(&options).expect("serialize options");
    let round: PipelineOptions = serde_json::from_str(&json).expect("deserialize options");
    assert_eq!(round, options);
}
