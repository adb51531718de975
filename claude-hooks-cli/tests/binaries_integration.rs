//! End-to-end tests that run the built hook binaries.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// A hook binary isolated from the user's config file.
fn hook(name: &str, temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.env("CLAUDE_HOOKS_CONFIG", temp.path().join("missing.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_logger_binary_appends_event() {
    let temp = TempDir::new().unwrap();
    let log_file = temp.path().join("logs").join("events.jsonl");

    hook("hook-logger", &temp)
        .arg(&log_file)
        .write_stdin(r#"{"hook_event_name":"Stop"}"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Logged to "));

    let content = fs::read_to_string(&log_file).unwrap();
    let entry: Value = serde_json::from_str(content.trim_end()).unwrap();
    assert_eq!(entry["hook_event_name"], "Stop");
    assert!(entry["timestamp"].is_string());
}

#[test]
fn test_logger_binary_requires_log_file() {
    let temp = TempDir::new().unwrap();

    hook("hook-logger", &temp).assert().failure();
}

#[test]
fn test_logger_binary_ignore_policy() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("file");
    fs::write(&blocker, "").unwrap();

    hook("hook-logger", &temp)
        .arg(blocker.join("events.jsonl"))
        .args(["--on-error", "ignore"])
        .write_stdin("{}")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: event not logged"));
}

#[test]
fn test_lint_binary_rejects_empty_stdin() {
    let temp = TempDir::new().unwrap();

    hook("hook-lint", &temp)
        .arg("--check")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No input data provided"));
}

#[test]
fn test_lint_binary_reports_missing_linter() {
    let temp = TempDir::new().unwrap();
    let empty_path = TempDir::new().unwrap();

    hook("hook-lint", &temp)
        .env("PATH", empty_path.path())
        .write_stdin(r#"{"files":["a.py"]}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not installed. Install with:"));
}

#[test]
fn test_notifier_binary_never_fails() {
    let temp = TempDir::new().unwrap();
    let empty_path = TempDir::new().unwrap();

    hook("hook-notifier", &temp)
        .env("PATH", empty_path.path())
        .args(["--title", "A", "--message", "B"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to show notification"));
}
