//! Integration tests for the rpn binary surface

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn rpn() -> Command {
    Command::cargo_bin("rpn").unwrap()
}

#[test]
fn test_eval_flag() {
    rpn()
        .args(["-c", "3 4 +"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_eval_flag_joins_remaining_args() {
    // The shell may have split the expression; -c consumes the rest
    rpn()
        .args(["-c", "3", "4", "+"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_eval_flag_fractional_output() {
    rpn()
        .args(["-c", "10 4 /"])
        .assert()
        .success()
        .stdout("2.5\n");
}

#[test]
fn test_eval_flag_error() {
    rpn()
        .args(["-c", "4 0 /"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn test_eval_flag_invalid_token() {
    rpn()
        .args(["-c", "3 x +"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("x is not a valid token"));
}

#[test]
fn test_eval_flag_empty_expression() {
    rpn()
        .args(["-c", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no expression provided"));
}

#[test]
fn test_version() {
    rpn()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rpn "));
}

#[test]
fn test_help() {
    rpn()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reverse Polish Notation"));
}

#[test]
fn test_stdin_lines() {
    rpn()
        .arg("-")
        .write_stdin("3 4 +\n10 2 /\n")
        .assert()
        .success()
        .stdout("7\n5\n");
}

#[test]
fn test_stdin_skips_blank_lines() {
    rpn()
        .arg("-")
        .write_stdin("\n3 4 +\n\n")
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_stdin_error_reports_line() {
    rpn()
        .arg("-")
        .write_stdin("3 4 +\n+\n")
        .assert()
        .failure()
        .stdout("7\n")
        .stderr(predicate::str::contains("<stdin>:2"));
}

#[test]
fn test_script_file() {
    let mut script = tempfile::NamedTempFile::new().unwrap();
    writeln!(script, "3 4 +").unwrap();
    writeln!(script).unwrap();
    writeln!(script, "5 1 2 + 4 * + 3 -").unwrap();
    script.flush().unwrap();

    rpn()
        .arg(script.path())
        .assert()
        .success()
        .stdout("7\n14\n");
}

#[test]
fn test_script_file_error_reports_line() {
    let mut script = tempfile::NamedTempFile::new().unwrap();
    writeln!(script, "3 4 +").unwrap();
    writeln!(script, "3 4").unwrap();
    script.flush().unwrap();

    rpn()
        .arg(script.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("leftover operands"));
}

#[test]
fn test_missing_script_file() {
    rpn()
        .arg("does-not-exist.rpn")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.rpn"));
}
