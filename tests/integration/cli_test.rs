//! Integration tests for the anketa CLI.

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{run_anketa, SAMPLE};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    assert_cmd::Command::cargo_bin("anketa")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter questionnaire records"))
        .stdout(predicate::str::contains("<INPUT>"))
        .stdout(predicate::str::contains("--letter"))
        .stdout(predicate::str::contains("--alphabet"));
}

#[test]
fn missing_input_argument_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_anketa(&[], dir.path());

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<INPUT>"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn missing_input_file_fails_with_one_line_error() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_anketa(&["no-such-file.txt"], dir.path());

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("input file not found"));
    assert!(stderr.contains("no-such-file.txt"));
    // Fatal before any output is produced.
    assert!(!dir.path().join("newdata.txt").exists());
}

#[test]
fn incomplete_record_warns_but_does_not_fail_the_run() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.txt"), SAMPLE).unwrap();

    let (stdout, stderr, exit_code) = run_anketa(&["data.txt"], dir.path());

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("skipping record"));
    assert!(stderr.contains("Имя"));
    assert!(stdout.contains("Matching records: 1"));
}

// ============================================================================
// Output File Tests
// ============================================================================

#[test]
fn writes_matching_records_in_fixed_field_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.txt"), SAMPLE).unwrap();

    let (stdout, _stderr, exit_code) = run_anketa(&["data.txt"], dir.path());

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Matching records: 1"));
    assert!(stdout.contains("newdata.txt"));

    let written = fs::read_to_string(dir.path().join("newdata.txt")).unwrap();
    assert_eq!(
        written,
        "Фамилия: Иванова\n\
         Имя: Анна\n\
         Пол: женский\n\
         Дата рождения: \n\
         Номер телефона или email: \n\
         Город: \n\n"
    );
}

#[test]
fn output_flag_redirects_the_sink() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.txt"), SAMPLE).unwrap();

    let (stdout, _stderr, exit_code) =
        run_anketa(&["data.txt", "--output", "filtered.txt"], dir.path());

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("filtered.txt"));
    assert!(dir.path().join("filtered.txt").exists());
    assert!(!dir.path().join("newdata.txt").exists());
}

#[test]
fn output_file_is_overwritten_not_appended() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.txt"), SAMPLE).unwrap();
    fs::write(dir.path().join("newdata.txt"), "leftover from a previous run").unwrap();

    let (_stdout, _stderr, exit_code) = run_anketa(&["data.txt"], dir.path());

    assert_eq!(exit_code, 0);
    let written = fs::read_to_string(dir.path().join("newdata.txt")).unwrap();
    assert!(!written.contains("leftover"));
    assert_eq!(written.matches("Имя:").count(), 1);
}

#[test]
fn whitespace_only_input_produces_empty_result() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.txt"), "   \n \n ").unwrap();

    let (stdout, _stderr, exit_code) = run_anketa(&["data.txt"], dir.path());

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Matching records: 0"));
    assert_eq!(
        fs::read_to_string(dir.path().join("newdata.txt")).unwrap(),
        ""
    );
}

// ============================================================================
// Letter / Alphabet Configuration Tests
// ============================================================================

#[test]
fn custom_letter_changes_the_selection() {
    let dir = TempDir::new().unwrap();
    let text = "Имя: Анна\nПол: ж\n\nИмя: Белла\nПол: ж\n";
    fs::write(dir.path().join("data.txt"), text).unwrap();

    let (stdout, _stderr, exit_code) =
        run_anketa(&["data.txt", "--letter", "б"], dir.path());

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Matching records: 1"));
    let written = fs::read_to_string(dir.path().join("newdata.txt")).unwrap();
    assert!(written.contains("Имя: Белла"));
    assert!(!written.contains("Имя: Анна"));
}

#[test]
fn latin_alphabet_mode_matches_transliterated_names() {
    let dir = TempDir::new().unwrap();
    let text = "Имя: Anna\nПол: ж\n\nИмя: Анна\nПол: ж\n";
    fs::write(dir.path().join("data.txt"), text).unwrap();

    let (stdout, _stderr, _) = run_anketa(&["data.txt"], dir.path());
    assert!(stdout.contains("Matching records: 1"));

    let (stdout, _stderr, _) =
        run_anketa(&["data.txt", "--alphabet", "latin"], dir.path());
    assert!(stdout.contains("Matching records: 2"));
}
