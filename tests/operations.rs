//! Tests for the individual load, normalize, describe and count operations.

use std::fs;
use std::path::PathBuf;

use column_summary::data::{load, normalize};
use column_summary::stats::{count_distinct, describe};
use column_summary::TableError;
use polars::prelude::DataFrame;
use tempfile::TempDir;

fn temp_csv(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("names.csv");
    fs::write(&path, contents).expect("write file");
    path
}

fn names(df: &DataFrame) -> Vec<Option<String>> {
    df.column("Name")
        .expect("Name column")
        .str()
        .expect("string column")
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect()
}

#[test]
fn load_keeps_every_line_in_order() {
    let dir = TempDir::new().expect("temp dir");
    let lines: Vec<String> = (0..50).map(|i| format!(" item{} ", 49 - i)).collect();
    let path = temp_csv(&dir, &(lines.join("\n") + "\n"));

    let df = load(&path, "Name").expect("load");

    assert_eq!(df.height(), lines.len());
    let loaded = names(&df);
    for (expected, got) in lines.iter().zip(&loaded) {
        assert_eq!(got.as_deref(), Some(expected.as_str()));
    }
}

#[test]
fn load_missing_file_is_file_access_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = load(dir.path().join("nope.csv"), "Name").expect_err("should fail");
    match err {
        TableError::FileAccess { path, .. } => assert!(path.ends_with("nope.csv")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn load_directory_is_file_access_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = load(dir.path(), "Name").expect_err("should fail");
    assert!(matches!(err, TableError::FileAccess { .. }));
}

#[test]
fn normalize_then_describe() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_csv(&dir, "  Alice  \nBob\nalice\n");

    let mut df = load(&path, "Name").expect("load");
    normalize(&mut df, "Name").expect("normalize");

    assert_eq!(
        names(&df),
        vec![
            Some("Alice".to_string()),
            Some("Bob".to_string()),
            Some("alice".to_string()),
        ]
    );
    let summary = describe(&df).expect("describe");
    assert_eq!(summary.columns.len(), 1);
    assert_eq!(summary.columns[0].unique, Some(3));
    assert_eq!(count_distinct(&df, "Name").expect("distinct"), 3);
}

#[test]
fn renormalizing_does_not_change_distinct_count() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_csv(&dir, " a\na \nb\n");

    let mut df = load(&path, "Name").expect("load");
    normalize(&mut df, "Name").expect("first pass");
    let once = count_distinct(&df, "Name").expect("distinct");
    let snapshot = names(&df);
    normalize(&mut df, "Name").expect("second pass");

    assert_eq!(count_distinct(&df, "Name").expect("distinct"), once);
    assert_eq!(names(&df), snapshot);
    assert_eq!(once, 2);
}

#[test]
fn unknown_column_is_schema_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_csv(&dir, "a\n");
    let mut df = load(&path, "Name").expect("load");

    assert!(matches!(
        normalize(&mut df, "Missing"),
        Err(TableError::Schema { .. })
    ));
    assert!(matches!(
        count_distinct(&df, "Missing"),
        Err(TableError::Schema { .. })
    ));
}
