//! End-to-end tests for the CLI surface.
//!
//! These exercise the compiled binary with `assert_cmd`. Network-dependent
//! paths are covered by the client integration tests; here we verify the
//! argument surface and the local validation short-circuit.

use assert_cmd::Command;
use predicates::prelude::*;

fn portal() -> Command {
    Command::cargo_bin("result-portal").expect("binary should build")
}

#[test]
fn test_help_lists_subcommands() {
    portal()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("fetch"));
}

#[test]
fn test_version_flag_works() {
    portal()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("result-portal"));
}

#[test]
fn test_missing_subcommand_fails() {
    portal().assert().failure();
}

#[test]
fn test_fetch_short_roll_number_fails_without_network() {
    // api-base points at a closed port: the validation error must surface
    // before any connection is attempted.
    portal()
        .args([
            "fetch",
            "--exam",
            "NEET-UG",
            "--roll-no",
            "12",
            "--dob",
            "2005-01-01",
            "--api-base",
            "http://127.0.0.1:9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Roll number must be at least 3 characters.",
        ));
}

#[test]
fn test_fetch_unknown_exam_rejected() {
    portal()
        .args([
            "fetch",
            "--exam",
            "SAT",
            "--roll-no",
            "12345",
            "--dob",
            "2005-01-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown exam"));
}
