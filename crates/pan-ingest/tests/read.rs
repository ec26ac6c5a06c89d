//! File-based ingestion tests.

use std::fs;
use std::path::PathBuf;

use pan_ingest::{IngestError, IngestOptions, check_file_size, read_pan_records};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_dataset_with_header_and_blanks() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "pan_numbers.csv",
        b"pan_number\nABCDE1234F\n abcde1234f \nAAAAA0000A\n\"\"\n  \n",
    );

    let records = read_pan_records(&path, &IngestOptions::default()).expect("read records");

    let values: Vec<Option<&str>> = records.iter().map(|r| r.value.as_deref()).collect();
    assert_eq!(
        values,
        vec![
            Some("ABCDE1234F"),
            Some(" abcde1234f "),
            Some("AAAAA0000A"),
            None,
            Some("  "),
        ]
    );
    assert!(records[3].is_blank());
    assert!(records[4].is_blank());
}

#[test]
fn strips_utf8_bom_from_header() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bom.csv", b"\xEF\xBB\xBFid,PAN\n1,BNZAB2318K\n");

    let options = IngestOptions::default().with_column("pan");
    let records = read_pan_records(&path, &options).expect("read records");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value.as_deref(), Some("BNZAB2318K"));
}

#[test]
fn rejects_utf16_files() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "utf16.csv", &[0xFF, 0xFE, b'p', 0x00]);

    let err = read_pan_records(&path, &IngestOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        IngestError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
            ..
        }
    ));
}

#[test]
fn enforces_size_limit() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "big.csv", b"pan\nABCDE1234F\n");

    let options = IngestOptions::default().with_max_file_size(4);
    let err = read_pan_records(&path, &options).unwrap_err();

    assert!(matches!(err, IngestError::FileTooLarge { max_size: 4, .. }));
}

#[test]
fn reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");

    let err = read_pan_records(&path, &IngestOptions::default()).unwrap_err();

    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn default_size_limit_accepts_small_files() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "small.csv", b"pan\nABCDE1234F\n");

    assert!(check_file_size(&path).is_ok());
}

#[test]
fn empty_lines_become_null_records() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "gaps.csv", b"pan_number\nBNZAB2318K\n\nAAAAA0000A\n\n");

    let records = read_pan_records(&path, &IngestOptions::default()).expect("read records");

    let values: Vec<Option<&str>> = records.iter().map(|r| r.value.as_deref()).collect();
    assert_eq!(values, vec![Some("BNZAB2318K"), None, Some("AAAAA0000A"), None]);
    assert_eq!(records[2].line, 4);
}
