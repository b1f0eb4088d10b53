//! Smoke tests for the pocketcalc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the pocketcalc binary with a clean environment
fn pocketcalc() -> Command {
    let mut cmd = Command::cargo_bin("pocketcalc").expect("pocketcalc binary should exist");
    cmd.env_remove("POCKETCALC_FORMAT")
        .env_remove("POCKETCALC_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    pocketcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pocketcalc"));
}

#[test]
fn test_help_flag() {
    pocketcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("calc"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("repl"));
}

#[test]
fn test_no_args_fails() {
    pocketcalc().assert().failure();
}

// ============================================================================
// Calc
// ============================================================================

#[test]
fn test_calc_left_to_right() {
    pocketcalc()
        .args(["calc", "2 + 3 * 4 ="])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_calc_split_arguments() {
    pocketcalc()
        .args(["calc", "9", "-", "4", "="])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_calc_divide_by_zero_is_zero() {
    pocketcalc()
        .args(["calc", "5 / 0 ="])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_calc_scientific() {
    pocketcalc()
        .args(["calc", "100 log"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_calc_unknown_key_fails() {
    pocketcalc()
        .args(["calc", "2 + apple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn test_calc_json() {
    pocketcalc()
        .args(["--format", "json", "calc", "1.5 × 2 ="])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display\": \"3\""));
}

#[test]
fn test_calc_format_from_env() {
    pocketcalc()
        .env("POCKETCALC_FORMAT", "json")
        .args(["calc", "4 √"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display\": \"2\""));
}

// ============================================================================
// Convert
// ============================================================================

#[test]
fn test_convert_length() {
    pocketcalc()
        .args(["-q", "convert", "length", "1000", "--from", "m", "--to", "km"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_convert_temperature_defaults() {
    pocketcalc()
        .args(["-q", "convert", "temperature", "0"])
        .assert()
        .success()
        .stdout("32\n");
}

#[test]
fn test_convert_unparsable_value() {
    pocketcalc()
        .args(["-q", "convert", "weight", "heavy"])
        .assert()
        .success()
        .stdout("?\n");
}

#[test]
fn test_convert_foreign_unit_fails() {
    pocketcalc()
        .args(["convert", "length", "1", "--from", "kg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a Length unit"));
}

// ============================================================================
// Listing commands
// ============================================================================

#[test]
fn test_units() {
    pocketcalc()
        .args(["units", "weight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pound"));
}

#[test]
fn test_keypad() {
    pocketcalc()
        .arg("keypad")
        .assert()
        .success()
        .stdout(predicate::str::contains("AC"));
}

#[test]
fn test_config() {
    pocketcalc()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Verbosity"));
}

// ============================================================================
// Repl
// ============================================================================

#[test]
fn test_repl_session() {
    pocketcalc()
        .args(["-q", "repl"])
        .write_stdin("6 ×\n7 =\nmode converter\ncategory temp\n100\nquit\n")
        .assert()
        .success()
        .stdout("6\n42\n?\n212\n");
}
