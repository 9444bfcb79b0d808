//! End-to-end tests for the calculator binary

use assert_cmd::Command;
use predicates::prelude::*;

fn calc() -> Command {
    Command::cargo_bin("kiosk-calculator").unwrap()
}

#[test]
fn test_addition() {
    calc()
        .args(["7", "+", "3", "="])
        .assert()
        .success()
        .stdout(predicate::str::contains("10"));
}

#[test]
fn test_chained_expression() {
    calc()
        .args(["7", "+", "3", "+", "2", "="])
        .assert()
        .success()
        .stdout(predicate::str::contains("12"));
}

#[test]
fn test_division_by_zero_prints_zero() {
    calc()
        .args(["5", "/", "0", "="])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn test_subtraction_with_hyphen_key() {
    calc()
        .args(["9", "-", "4", "="])
        .assert()
        .success()
        .stdout(predicate::str::diff("5\n"));
}

#[test]
fn test_compact_expression() {
    calc()
        .args(["12x3="])
        .assert()
        .success()
        .stdout(predicate::str::diff("36\n"));
}

#[test]
fn test_json_format() {
    calc()
        .args(["--format", "json", "7", "+", "3", "="])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display\": \"10\""));
}

#[test]
fn test_interactive_session() {
    calc()
        .write_stdin("7 + 3 =\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("10"));
}
