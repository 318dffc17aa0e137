//! CLI surface tests for cold

use assert_cmd::cargo;
use predicates::prelude::*;

fn cold() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("cold"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version() {
    cold().arg("--version").assert().success().stdout(predicate::str::contains("cold"));
}

#[test]
fn test_help() {
    cold()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("below zero"));
}

#[test]
fn test_unknown_flag_fails() {
    cold().arg("--bogus").write_stdin("0\n").assert().failure();
}

#[test]
fn test_json_output() {
    cold()
        .arg("--json")
        .write_stdin("4\n1 -2 3 -4\n")
        .assert()
        .success()
        .stdout("{\"readings\":4,\"negatives\":2}\n");
}

#[test]
fn test_verbose_keeps_stdout_clean() {
    cold()
        .arg("--verbose")
        .write_stdin("1\n-5\n")
        .assert()
        .success()
        .stdout("1\n")
        .stderr(predicate::str::contains("below zero"));
}
