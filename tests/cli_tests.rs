//! Command-line integration tests
//!
//! Only paths that fail or exit before the terminal UI starts are covered
//! here; the UI itself is tested through the library.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tripsearch() -> Command {
    Command::cargo_bin("tripsearch").unwrap()
}

#[test]
fn test_help_lists_options() {
    tripsearch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--category"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_version() {
    tripsearch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_category_is_rejected() {
    tripsearch()
        .args(["--category", "museum", "paris"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category 'museum'"));
}

#[test]
fn test_invalid_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[search]\ndebounce_ms = \"soon\"\n").unwrap();

    tripsearch()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_non_http_endpoint_is_rejected() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("none.toml");

    tripsearch()
        .arg("--config")
        .arg(&missing)
        .args(["--endpoint", "ftp://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid search endpoint"));
}
