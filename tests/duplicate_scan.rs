//! Tests for the duplicate scan.

use std::path::PathBuf;

use minspec::{find_repeated_records, DuplicateKey, ScanError};
use tempfile::TempDir;

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("mineral_data.csv");
    std::fs::write(&path, content).expect("Failed to write scan input");
    path
}

fn key(name: &str, sample_id: &str) -> DuplicateKey {
    DuplicateKey {
        name: name.to_string(),
        sample_id: sample_id.to_string(),
    }
}

#[test]
fn test_reports_only_repeat_occurrences() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_input(&dir, "name,color,sample_id\nA,p,1\nB,q,2\nA,r,1\n");

    let repeats = find_repeated_records(&path, b',').expect("Scan failed");
    // The first (A,1) is not reported, only its repeat.
    assert_eq!(repeats, vec![key("A", "1")]);
}

#[test]
fn test_same_name_different_sample_id_is_not_a_duplicate() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_input(&dir, "name,color,sample_id\nA,p,1\nA,q,2\nA,r,3\n");

    let repeats = find_repeated_records(&path, b',').expect("Scan failed");
    assert!(repeats.is_empty());
}

#[test]
fn test_header_only_input_yields_empty_result() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_input(&dir, "name,color,sample_id\n");

    let repeats = find_repeated_records(&path, b',').expect("Scan failed");
    assert!(repeats.is_empty());
}

#[test]
fn test_first_line_is_skipped_regardless_of_content() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // The first line looks exactly like a data row; it must still be
    // consumed as the header and never counted.
    let path = write_input(&dir, "A,x,1\nA,x,1\nA,x,1\n");

    let repeats = find_repeated_records(&path, b',').expect("Scan failed");
    assert_eq!(repeats, vec![key("A", "1")]);
}

#[test]
fn test_key_occurring_k_times_is_reported_k_minus_one_times() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_input(
        &dir,
        "name,color,sample_id\nA,p,1\nA,q,1\nA,r,1\nA,s,1\n",
    );

    let repeats = find_repeated_records(&path, b',').expect("Scan failed");
    assert_eq!(repeats, vec![key("A", "1"), key("A", "1"), key("A", "1")]);
}

#[test]
fn test_repeats_come_out_in_encounter_order() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_input(
        &dir,
        "name,color,sample_id\nA,p,1\nB,q,2\nB,r,2\nA,s,1\nB,t,2\n",
    );

    let repeats = find_repeated_records(&path, b',').expect("Scan failed");
    assert_eq!(repeats, vec![key("B", "2"), key("A", "1"), key("B", "2")]);
}

#[test]
fn test_keys_are_matched_exactly() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // Case and surrounding whitespace are significant.
    let path = write_input(&dir, "name,color,sample_id\nA,p,1\na,q,1\nA,r, 1\n");

    let repeats = find_repeated_records(&path, b',').expect("Scan failed");
    assert!(repeats.is_empty());
}

#[test]
fn test_short_record_is_an_error_with_its_line_number() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_input(&dir, "name,color,sample_id\nA,p,1\nB,2\n");

    let err = find_repeated_records(&path, b',').expect_err("Scan should fail");
    match err {
        ScanError::ShortRecord { line, fields } => {
            assert_eq!(line, 3);
            assert_eq!(fields, 2);
        }
        other => panic!("Expected ShortRecord, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("does_not_exist.csv");

    let err = find_repeated_records(&path, b',').expect_err("Scan should fail");
    assert!(matches!(err, ScanError::ReadError(_)));
}

#[test]
fn test_scan_honors_custom_delimiter() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_input(&dir, "name\tcolor\tsample_id\nA\tp\t1\nA\tq\t1\n");

    let repeats = find_repeated_records(&path, b'\t').expect("Scan failed");
    assert_eq!(repeats, vec![key("A", "1")]);
}
