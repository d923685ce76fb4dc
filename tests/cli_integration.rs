//! End-to-end tests for the `nikto-gate` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &Path, command: &str) -> std::path::PathBuf {
    let path = dir.join("nikto-gate.toml");
    fs::write(&path, format!("[nikto]\ncommand = {:?}\n", command)).unwrap();
    path
}

#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("nikto-gate")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("scan"));
}

#[test]
fn test_check_fails_when_scanner_is_missing() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), "nikto-gate-missing-scanner");

    Command::cargo_bin("nikto-gate")
        .unwrap()
        .args(["check", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Process execution failed"));
}

#[test]
fn test_scan_never_runs_without_version_gate() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), "nikto-gate-missing-scanner");

    Command::cargo_bin("nikto-gate")
        .unwrap()
        .args(["scan", "example.com", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nikto-gate-missing-scanner"));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("nikto-gate")
        .unwrap()
        .args(["check", "--config"])
        .arg(temp_dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}
