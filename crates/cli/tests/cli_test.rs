// End-to-end tests for the burstbench binary
//
// Run with: cargo test -p burstbench-cli --test cli_test
// Requires: `sh` on PATH (stub commands stand in for curl)

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn burstbench(output_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_burstbench"))
        .arg("-o")
        .arg(output_dir)
        .args(["-e", "http://stub.invalid/fn"])
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("LOG_LEVEL")
        .output()
        .expect("Failed to run burstbench")
}

/// The single run directory created under `output_dir`
fn only_run_dir(output_dir: &Path) -> PathBuf {
    let entries: Vec<PathBuf> = fs::read_dir(output_dir)
        .expect("output dir should exist")
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1, "expected one run dir, got {entries:?}");
    entries.into_iter().next().unwrap()
}

fn result_rows(run_dir: &Path) -> Vec<String> {
    fs::read_to_string(run_dir.join("results.csv"))
        .expect("results.csv should exist")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_three_bursts_with_succeeding_stub() {
    let tmp = tempfile::tempdir().unwrap();

    let output = burstbench(tmp.path(), &["-b", "3", "-i", "0", "--command", "true"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let rows = result_rows(&only_run_dir(tmp.path()));
    assert_eq!(rows.len(), 3);
    for row in rows {
        row.parse::<u64>().expect("row should be integer milliseconds");
    }
}

#[test]
fn test_failing_stub_exits_non_zero_with_stderr() {
    let tmp = tempfile::tempdir().unwrap();

    let output = burstbench(
        tmp.path(),
        &[
            "-b",
            "1",
            "-i",
            "0",
            "--command",
            "echo stub-broke-here >&2; exit 1",
        ],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("stub-broke-here"), "stderr: {stderr}");
    assert!(result_rows(&only_run_dir(tmp.path())).is_empty());
}

#[test]
fn test_default_burst_settings_create_timestamped_run() {
    let tmp = tempfile::tempdir().unwrap();

    // Default -b 1 -i 10000: one sample, then a ten second pause
    let output = burstbench(tmp.path(), &["--command", "true", "--format", "json"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let run_dir = only_run_dir(tmp.path());
    let name = run_dir.file_name().unwrap().to_str().unwrap();
    chrono::DateTime::parse_from_rfc3339(name).expect("run dir should be an RFC3339 timestamp");

    let files: Vec<_> = fs::read_dir(&run_dir).unwrap().collect();
    assert_eq!(files.len(), 1);
    assert_eq!(result_rows(&run_dir).len(), 1);

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["samples_written"], 1);
    assert_eq!(summary["timestamp"], name);
}

#[test]
fn test_zero_bursts_leave_empty_results() {
    let tmp = tempfile::tempdir().unwrap();

    let output = burstbench(tmp.path(), &["-b", "0", "--command", "false"]);

    assert!(output.status.success());
    assert!(result_rows(&only_run_dir(tmp.path())).is_empty());
}

#[test]
fn test_empty_endpoint_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_burstbench"))
        .arg("-o")
        .arg(tmp.path())
        .args(["-e", "", "-b", "1", "-i", "0"])
        .output()
        .expect("Failed to run burstbench");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("endpoint must not be empty"));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}
