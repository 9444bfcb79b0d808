//! End-to-end tests for the forms binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn forms() -> Command {
    Command::cargo_bin("kiosk-forms").unwrap()
}

#[test]
fn test_default_form_happy_path() {
    forms()
        .args(["--format", "json"])
        .write_stdin("ana\nana@example.com\n23\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Username\": \"ana\""))
        .stdout(predicate::str::contains("\"Email\": \"ana@example.com\""))
        .stdout(predicate::str::contains("\"Age\": \"23\""));
}

#[test]
fn test_invalid_answer_reprompts() {
    // First email answer fails validation; the corrected one is accepted.
    forms()
        .args(["--format", "json"])
        .write_stdin("ana\nnot-an-email\nana@example.com\n23\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Email\": \"ana@example.com\""))
        .stderr(predicate::str::contains("email format"));
}

#[test]
fn test_custom_definition_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        title = "Contact"

        [[line]]
        name = "Name"
        kind = "text"
        hint = "Your name"
        "#
    )
    .unwrap();

    forms()
        .args(["--format", "json", "--file"])
        .arg(file.path())
        .write_stdin("Rui\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Name\": \"Rui\""));
}

#[test]
fn test_truncated_input_fails() {
    forms()
        .write_stdin("ana\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input ended"));
}

#[test]
fn test_missing_definition_file_fails() {
    forms()
        .args(["--file", "/nonexistent/definition.toml"])
        .write_stdin("")
        .assert()
        .failure();
}
