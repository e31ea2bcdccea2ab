use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[allow(deprecated)]
fn fieldcheck() -> Command {
    Command::cargo_bin("fieldcheck").expect("Failed to find fieldcheck binary")
}

// ============================================================================
// plate command tests
// ============================================================================

#[test]
fn test_plate_valid() {
    fieldcheck()
        .arg("plate")
        .arg("KA PA 777")
        .assert()
        .success()
        .stdout(predicate::str::contains("KA PA 777"))
        .stdout(predicate::str::contains("KA-PA-777"));
}

#[test]
fn test_plate_lowercase_without_space() {
    fieldcheck()
        .arg("plate")
        .arg("ka pa777")
        .assert()
        .success()
        .stdout(predicate::str::contains("KA-PA-777"));
}

#[test]
fn test_plate_invalid_exits_with_failure() {
    fieldcheck()
        .arg("plate")
        .arg("KA PA 0777")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Invalid: 1"));
}

#[test]
fn test_plate_mixed_batch_fails() {
    fieldcheck()
        .args(["plate", "KA PA 777", "ER A 55H"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Valid:   1"))
        .stdout(predicate::str::contains("Invalid: 1"));
}

#[test]
fn test_plate_json_output() {
    let output = fieldcheck()
        .args(["plate", "--format", "json", "KA PA 777", "B 1234"])
        .output()
        .unwrap();

    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], true);
    assert_eq!(json["plates"][0]["normalized"], "KA-PA-777");
    assert_eq!(json["plates"][1]["normalized"], "B-1234");
    assert_eq!(json["plates"][1]["valid"], true);
}

#[test]
fn test_plate_unsupported_country() {
    fieldcheck()
        .args(["plate", "--country", "fr", "AB-123-CD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported license plate country"));
}

#[test]
fn test_plate_requires_argument() {
    fieldcheck().arg("plate").assert().failure();
}

// ============================================================================
// completeness command tests
// ============================================================================

#[test]
fn test_completeness_complete_record() {
    fieldcheck()
        .arg("completeness")
        .arg(fixture_path("complete_contact.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact information is complete"));
}

#[test]
fn test_completeness_missing_email() {
    fieldcheck()
        .arg("completeness")
        .arg(fixture_path("missing_email.yml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("MISSING_EMAIL"))
        .stdout(predicate::str::contains("Email address is missing"));
}

#[test]
fn test_completeness_empty_email_counts_as_missing() {
    fieldcheck()
        .arg("completeness")
        .arg(fixture_path("empty_contact.toml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("MISSING_EMAIL"));
}

#[test]
fn test_completeness_flags_override_record() {
    fieldcheck()
        .arg("completeness")
        .arg(fixture_path("missing_email.yml"))
        .args(["--email", "jane@example.org"])
        .assert()
        .success();
}

#[test]
fn test_completeness_contact_policy_generic_message() {
    let output = fieldcheck()
        .args(["completeness", "--policy", "contact", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["complete"], false);
    assert_eq!(json["policy"], "contact");
    assert_eq!(
        json["findings"],
        serde_json::json!(["MISSING_EMAIL", "MISSING_MOBILE"])
    );
    assert_eq!(json["messages"].as_array().unwrap().len(), 1);
}

#[test]
fn test_completeness_contact_policy_missing_mobile() {
    fieldcheck()
        .args(["completeness", "--policy", "contact", "--email", "a@b.c"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("MISSING_MOBILE"))
        .stdout(predicate::str::contains("MISSING_EMAIL").not());
}

#[test]
fn test_completeness_unknown_policy() {
    fieldcheck()
        .args(["completeness", "--policy", "strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown completeness policy"));
}

#[test]
fn test_completeness_invalid_record_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    fieldcheck()
        .arg("completeness")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse record file"));
}

#[test]
fn test_completeness_unsupported_record_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("record.csv");
    fs::write(&path, "email\njane@example.org\n").unwrap();

    fieldcheck()
        .arg("completeness")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

// ============================================================================
// general
// ============================================================================

#[test]
fn test_help() {
    fieldcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plate"))
        .stdout(predicate::str::contains("completeness"));
}
