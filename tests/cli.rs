use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use std::process::Command;

#[test]
fn faunapass_cli_help() {
    Command::cargo_bin("faunapass")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains(
            "Strong random password generator with an interactive terminal menu",
        ))
        .stdout(contains("generate"))
        .stdout(contains("Generate a password"))
        .stdout(contains("analyze"))
        .stdout(contains("Analyze the strength of a password"))
        .stdout(contains("--json"))
        .stdout(contains("-h, --help"))
        .stdout(contains("-V, --version"));
}

#[test]
fn generate_respects_the_requested_length() {
    Command::cargo_bin("faunapass")
        .unwrap()
        .args(["generate", "--length", "12"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            out.lines()
                .next()
                .map_or(false, |line| line.chars().count() == 12)
        }))
        .stdout(contains("Strength:"));
}

#[test]
fn generate_json_reports_password_and_strength() {
    let output = Command::cargo_bin("faunapass")
        .unwrap()
        .args(["--json", "generate", "--length", "20", "--symbols"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["password"].as_str().unwrap().chars().count(), 20);
    assert!(report["strength"].as_u64().unwrap() <= 100);
    assert!(report["label"].as_str().is_some());
}

#[test]
fn generate_requires_a_character_class() {
    Command::cargo_bin("faunapass")
        .unwrap()
        .env_remove("FAUNAPASS_DEFAULT_SYMBOLS")
        .args(["generate", "--no-uppercase", "--no-lowercase", "--no-numbers"])
        .assert()
        .failure()
        .stderr(contains("at least one character class must be enabled"));
}

#[test]
fn generate_rejects_out_of_range_lengths() {
    Command::cargo_bin("faunapass")
        .unwrap()
        .env_remove("FAUNAPASS_MIN_LENGTH")
        .env_remove("FAUNAPASS_MAX_LENGTH")
        .args(["generate", "--length", "2"])
        .assert()
        .failure()
        .stderr(contains("password length must be between 4 and 100"));
}

#[test]
fn consecutive_runs_differ() {
    let first = Command::cargo_bin("faunapass")
        .unwrap()
        .args(["generate", "--length", "32"])
        .output()
        .unwrap();
    let second = Command::cargo_bin("faunapass")
        .unwrap()
        .args(["generate", "--length", "32"])
        .output()
        .unwrap();

    assert!(first.status.success());
    assert!(second.status.success());
    assert_ne!(first.stdout, second.stdout);
}

#[test]
fn analyze_prints_a_meter_and_feedback() {
    Command::cargo_bin("faunapass")
        .unwrap()
        .args(["analyze", "correcthorse"])
        .assert()
        .success()
        .stdout(contains("/100"))
        .stdout(contains("Add uppercase letters"));
}

#[test]
fn analyze_json_reports_feedback_lines() {
    let output = Command::cargo_bin("faunapass")
        .unwrap()
        .args(["--json", "analyze", "aB3!aB3!aB3!aB3!aB3!"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["strength"].as_u64().unwrap(), 50);
    assert_eq!(report["label"].as_str().unwrap(), "Moderate");
    assert!(!report["feedback"].as_array().unwrap().is_empty());
}
