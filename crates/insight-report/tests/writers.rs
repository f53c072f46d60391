#![allow(missing_docs)]

use std::fs;

use insight_model::{AnalysisKind, InsightRecord, InsightSink, StatTest};
use insight_report::{
    CsvInsightWriter, JsonInsightWriter, ReportError, ReportFormat, ReportWriter, WriteMode,
    read_csv_records, read_json_records,
};

fn chi_square_record() -> InsightRecord {
    InsightRecord {
        date: "10-16-26".to_string(),
        dataset_id: "custom".to_string(),
        insight_text: "Significant difference in 'non-active' and 'active' between 'group' groups. "
            .to_string(),
        p_value: 0.0012,
        magnitude: None,
        column_1: "active".to_string(),
        column_2: "group".to_string(),
        test: StatTest::ChiSquare,
        analysis_kind: AnalysisKind::BinCat,
        statistic: 21.5,
    }
}

fn correlation_record() -> InsightRecord {
    InsightRecord {
        date: "10-16-26".to_string(),
        dataset_id: "custom".to_string(),
        insight_text: "x increases nearly linearly with respect to y. ".to_string(),
        p_value: 0.0,
        magnitude: Some(0.98),
        column_1: "x".to_string(),
        column_2: "y".to_string(),
        test: StatTest::Pearson,
        analysis_kind: AnalysisKind::ContCont,
        statistic: 0.98,
    }
}

#[test]
fn test_csv_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("insights.csv");
    let mut writer = CsvInsightWriter::new(&path).unwrap();
    writer
        .write(&[chi_square_record(), correlation_record()])
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "date,dataset,insight_text,p_val,magnitude,col_1,col_2,analysis,analysis_type,statistic"
    );
    let first = lines.next().unwrap();
    assert!(first.contains(",0.0012,,active,group,Chi-square,bin X cat,"));
    let second = lines.next().unwrap();
    assert!(second.contains(",0.98,x,y,Pearson corr,cont X cont,"));
    assert!(lines.next().is_none());

    let back = read_csv_records(&path).unwrap();
    assert_eq!(back, vec![chi_square_record(), correlation_record()]);
}

#[test]
fn test_csv_append_keeps_single_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("insights.csv");
    let mut writer = CsvInsightWriter::new(&path)
        .unwrap()
        .with_mode(WriteMode::Append);
    writer.write(&[chi_square_record()]).unwrap();
    writer.write(&[correlation_record()]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches("insight_text").count(), 1);
    assert_eq!(read_csv_records(&path).unwrap().len(), 2);
}

#[test]
fn test_csv_replace_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("insights.csv");
    let mut writer = CsvInsightWriter::new(&path).unwrap();
    writer.write(&[chi_square_record()]).unwrap();
    writer.write(&[correlation_record()]).unwrap();
    assert_eq!(read_csv_records(&path).unwrap(), vec![correlation_record()]);
}

#[test]
fn test_json_append_extends_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("insights.json");
    let mut writer = JsonInsightWriter::new(&path)
        .unwrap()
        .with_mode(WriteMode::Append);
    writer.write(&[chi_square_record()]).unwrap();
    writer.write(&[correlation_record()]).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["analysis_type"], "bin X cat");
    assert!(rows[0]["magnitude"].is_null());
    assert_eq!(rows[1]["magnitude"], 0.98);

    assert_eq!(
        read_json_records(&path).unwrap(),
        vec![chi_square_record(), correlation_record()]
    );
}

#[test]
fn test_empty_record_set_writes_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    let mut writer = ReportWriter::new(ReportFormat::Json, &path, WriteMode::Replace).unwrap();
    writer.write(&[]).unwrap();
    assert_eq!(writer.name(), "json");
    assert!(read_json_records(&path).unwrap().is_empty());
}

#[test]
fn test_empty_path_is_rejected() {
    assert!(matches!(
        CsvInsightWriter::new(""),
        Err(ReportError::Config { .. })
    ));
    assert!(matches!(
        ReportWriter::new(ReportFormat::Json, "", WriteMode::Append),
        Err(ReportError::Config { .. })
    ));
}
