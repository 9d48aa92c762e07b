//! Integration tests for the stc CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get an stc command
fn stc() -> Command {
    Command::cargo_bin("stc").unwrap()
}

/// Helper to write a fields file into a temp directory
fn write_fields(tmp: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = tmp.path().join("fields.json");
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    stc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simple token"));
}

#[test]
fn test_unknown_command_fails() {
    stc()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Version Command Tests
// ============================================================================

#[test]
fn test_version_reports_eos_capability() {
    stc()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"blockchain\": \"eos\""))
        .stdout(predicate::str::contains("\"version\": 2"))
        .stdout(predicate::str::contains("\"result\": \"success\""));
}

// ============================================================================
// Schema Command Tests
// ============================================================================

#[test]
fn test_schema_declares_ticker_and_decimals() {
    stc()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ticker\""))
        .stdout(predicate::str::contains("\"decimals\""))
        .stdout(predicate::str::contains("^[A-Z][A-Z0-5]+$"));
}

#[test]
fn test_ui_schema_is_empty() {
    stc()
        .args(["schema", "--ui"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{}"));
}

// ============================================================================
// Construct Command Tests
// ============================================================================

#[test]
fn test_construct_renders_to_stdout() {
    let tmp = TempDir::new().unwrap();
    let fields = write_fields(&tmp, r#"{"ticker": "ABC1234", "decimals": 4}"#);

    stc()
        .args(["construct", "--fields"])
        .arg(&fields)
        .assert()
        .success()
        .stdout(predicate::str::contains("S(4, ABC1234)"))
        .stdout(predicate::str::contains("%ticker%").not())
        .stdout(predicate::str::contains("%decimals%").not());
}

#[test]
fn test_construct_writes_output_file() {
    let tmp = TempDir::new().unwrap();
    let fields = write_fields(&tmp, r#"{"ticker": "TOK", "decimals": 0}"#);
    let out = tmp.path().join("simpletoken.cpp");

    stc()
        .args(["construct", "--fields"])
        .arg(&fields)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("simpletoken"));

    let source = fs::read_to_string(&out).unwrap();
    assert!(source.contains("S(0, TOK)"));
    assert!(source.contains("EOSIO_ABI( simpletoken, (transfer)(issue))"));
}

#[test]
fn test_construct_rejects_short_ticker() {
    let tmp = TempDir::new().unwrap();
    let fields = write_fields(&tmp, r#"{"ticker": "AB", "decimals": 4}"#);

    stc()
        .args(["construct", "--fields"])
        .arg(&fields)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ticker"));
}

#[test]
fn test_construct_rejects_decimals_out_of_range() {
    let tmp = TempDir::new().unwrap();
    let fields = write_fields(&tmp, r#"{"ticker": "TOK", "decimals": 9}"#);

    stc()
        .args(["construct", "--fields"])
        .arg(&fields)
        .assert()
        .failure()
        .stderr(predicate::str::contains("decimals"));
}

#[test]
fn test_construct_rejects_malformed_json() {
    let tmp = TempDir::new().unwrap();
    let fields = write_fields(&tmp, "{not json");

    stc()
        .args(["construct", "--fields"])
        .arg(&fields)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_construct_missing_fields_file_fails() {
    stc()
        .args(["construct", "--fields", "/nonexistent/fields.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

// ============================================================================
// Functions Command Tests
// ============================================================================

#[test]
fn test_functions_lists_all_four_actions() {
    stc()
        .arg("functions")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"transfer\""))
        .stdout(predicate::str::contains("\"issue\""))
        .stdout(predicate::str::contains("\"totalSupply\""))
        .stdout(predicate::str::contains("\"account\""));
}

#[test]
fn test_functions_dashboard_is_total_supply_only() {
    stc()
        .arg("functions")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard_functions"))
        .stdout(predicate::str::contains("Total supply"));
}
