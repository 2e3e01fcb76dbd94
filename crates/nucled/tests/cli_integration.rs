//! Integration tests for the `nucled` binary.
//!
//! These exercise the CLI via `assert_cmd`. Only hardware-free paths are
//! tested: help/version output and command strings that are rejected by
//! the parser before any firmware call is attempted.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cli() -> assert_cmd::Command {
    cargo_bin_cmd!("nucled")
}

#[test]
fn cli_help_succeeds() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("nucled"));
}

#[test]
fn cli_version_prints_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn set_help_names_the_grammar() {
    cli()
        .args(["set", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("led,brightness,blink,color"));
}

// ── rejected writes ──

#[test]
fn set_unknown_led_fails_with_message() {
    cli()
        .args(["set", "desk,50,none,blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid LED `desk`"));
}

#[test]
fn set_out_of_range_brightness_fails() {
    cli()
        .args(["set", "power,150,none,blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid brightness"));
}

#[test]
fn set_wrong_color_for_led_fails() {
    cli()
        .args(["set", "power,50,none,cyan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid color `cyan`"));
}

#[test]
fn set_too_many_fields_fails() {
    cli()
        .args(["set", "power,50,none,blue,extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many arguments"));
}

#[test]
fn set_too_few_fields_fails() {
    cli()
        .args(["set", "power,50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too few arguments"));
}

// ── status ──

#[test]
fn status_always_reports_both_leds() {
    // With or without a reachable firmware interface, the report always
    // carries one block per LED, power first.
    let output = cli().arg("status").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    let power = stdout.find("Power LED").expect("power block missing");
    let ring = stdout.find("Ring LED").expect("ring block missing");
    assert!(power < ring, "power block should precede ring block");
}

#[test]
fn status_json_is_valid_json_with_both_leds() {
    let output = cli()
        .args(["--json", "status"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("status --json should produce valid JSON");
    assert!(json["power"]["status"].is_string());
    assert!(json["ring"]["status"].is_string());
}
