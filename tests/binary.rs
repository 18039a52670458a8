//! Runs the compiled binary in a temporary working directory.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_in(dir: &TempDir) -> Output {
    Command::new(env!("CARGO_BIN_EXE_column_summary"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn column_summary")
}

#[test]
fn prints_report_for_data_csv() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("data.csv"), "  Alice  \nBob\nalice\n").expect("write input");

    let output = run_in(&dir);

    assert!(output.status.success(), "status: {:?}", output.status);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.lines().next().expect("header").contains("Name"));
    assert!(stdout.contains("Alice"));
    assert!(stdout.ends_with("\nUnique values count:\n3\n"));
}

#[test]
fn missing_data_csv_exits_non_zero_with_empty_stdout() {
    let dir = TempDir::new().expect("temp dir");

    let output = run_in(&dir);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("data.csv"), "stderr was: {stderr}");
}

#[test]
fn ragged_data_csv_exits_non_zero() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("data.csv"), "Alice\nBob,Smith\n").expect("write input");

    let output = run_in(&dir);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "stderr was: {stderr}");
}
