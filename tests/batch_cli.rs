//! End-to-end checks of the batch-mode process contract.
//!
//! Batch mode is what the measurement scripts drive, so the observable
//! behavior is pinned down here: one CSV line on stdout and exit 0 on
//! success, a stderr diagnostic and non-zero exit on a bad configuration.

use std::process::{Command, Output};

fn run_batch(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_matscale"))
        .args(args)
        .output()
        .expect("failed to run matscale binary")
}

#[test]
fn test_batch_emits_single_csv_line_and_exits_zero() {
    let output = run_batch(&["100", "10", "1", "4"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "expected exactly one line, got: {:?}", stdout);

    let fields: Vec<&str> = lines[0].split(',').collect();
    assert_eq!(fields.len(), 3, "line shape is method,threads,elapsed");
    assert_eq!(fields[0], "1");
    assert_eq!(fields[1], "4");

    // elapsed is a fixed 8-decimal float
    let (whole, frac) = fields[2].split_once('.').expect("decimal point");
    assert!(!whole.is_empty() && whole.chars().all(|ch| ch.is_ascii_digit()));
    assert_eq!(frac.len(), 8, "elapsed not 8 decimals: {}", fields[2]);
    assert!(frac.chars().all(|ch| ch.is_ascii_digit()));
}

#[test]
fn test_batch_sequential_method_line() {
    let output = run_batch(&["16", "4", "3", "1"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim_end().starts_with("3,1,"));
}

#[test]
fn test_batch_rejects_indivisible_block_size() {
    let output = run_batch(&["5", "2", "1", "4"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "no CSV line on a config error");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("divisible"), "diagnostic missing: {:?}", stderr);
}

#[test]
fn test_batch_rejects_unknown_method() {
    let output = run_batch(&["8", "2", "9", "2"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown method"), "diagnostic missing: {:?}", stderr);
}
