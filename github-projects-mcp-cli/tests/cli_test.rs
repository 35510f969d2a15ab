//! CLI smoke tests

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_serve_subcommand() {
    Command::cargo_bin("github-projects-mcp")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("github-projects-mcp")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("github-projects-mcp"));
}

#[test]
fn test_no_command_prints_help() {
    Command::cargo_bin("github-projects-mcp")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_subcommand_fails() {
    Command::cargo_bin("github-projects-mcp")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}
