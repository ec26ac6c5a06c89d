//! Integration tests for report outputs.

use std::fs;

use pan_model::{CheckFailure, Classification, CleanedValue, DuplicateMode, SummaryReport};
use pan_report::{
    CLASSIFICATIONS_FILE, REPORT_SCHEMA, ReportSource, SUMMARY_FILE, failure_counts,
    sha256_hex, write_reports,
};
use tempfile::TempDir;

fn classification(value: &str, failures: Vec<CheckFailure>) -> Classification {
    Classification::new(CleanedValue::parse(value).unwrap(), failures)
}

fn sample() -> (Vec<Classification>, SummaryReport) {
    let classifications = vec![
        classification("AAAAA0000A", vec![CheckFailure::AdjacentRepeat]),
        classification(
            "ABCDE1234F",
            vec![
                CheckFailure::SequentialLetters,
                CheckFailure::SequentialDigits,
            ],
        ),
        classification("BNZAB2318K", vec![]),
    ];
    let summary = SummaryReport {
        total_processed: 6,
        total_valid: 1,
        total_invalid: 2,
        total_blank: 3,
        blank_records: 2,
        duplicate_records: 1,
    };
    (classifications, summary)
}

#[test]
fn writes_classification_csv() {
    let dir = TempDir::new().unwrap();
    let (classifications, summary) = sample();

    let paths = write_reports(
        dir.path(),
        ReportSource::default(),
        DuplicateMode::Collapse,
        summary,
        &classifications,
    )
    .expect("write reports");

    assert_eq!(paths.classifications, dir.path().join(CLASSIFICATIONS_FILE));
    let contents = fs::read_to_string(&paths.classifications).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "pan_number,category,failed_checks",
            "AAAAA0000A,Invalid PAN,PAN002",
            "ABCDE1234F,Invalid PAN,PAN003;PAN004",
            "BNZAB2318K,Valid PAN,",
        ]
    );
}

#[test]
fn writes_summary_json_with_provenance() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("nested/out");
    let (classifications, summary) = sample();
    let source = ReportSource {
        path: Some("pans.csv".into()),
        sha256: Some(sha256_hex(b"pan_number\n")),
    };

    let paths = write_reports(
        &out,
        source,
        DuplicateMode::Collapse,
        summary,
        &classifications,
    )
    .expect("write reports");

    assert_eq!(paths.summary, out.join(SUMMARY_FILE));
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths.summary).unwrap()).unwrap();
    assert_eq!(json["schema"], REPORT_SCHEMA);
    assert_eq!(json["source"], "pans.csv");
    assert_eq!(json["duplicate_mode"], "Collapse");
    assert_eq!(json["summary"]["total_processed"], 6);
    assert_eq!(json["summary"]["total_blank"], 3);
    assert_eq!(json["failure_counts"]["PAN003"], 1);
    assert_eq!(json["source_sha256"].as_str().unwrap().len(), 64);
    assert!(json["generated_at"].is_string());
}

#[test]
fn counts_failures_per_code() {
    let (classifications, _) = sample();
    let counts = failure_counts(&classifications);
    assert_eq!(counts.len(), 3);
    assert_eq!(counts.get("PAN002"), Some(&1));
    assert_eq!(counts.get("PAN001"), None);
}
