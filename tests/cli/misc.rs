use crate::cli::support::evalio;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    evalio(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: evalio"))
        .stdout(predicate::str::contains("evaluate"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    evalio(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("evalio"));
}

#[test]
fn test_no_command_prints_hint() {
    let dir = tempdir().unwrap();
    evalio(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("evalio --help"));
}

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    evalio(dir.path())
        .args(["--format", "yaml", "demo"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_mode_exit_code_2() {
    let dir = tempdir().unwrap();
    evalio(dir.path())
        .args(["demo", "--mode", "fuzzy"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    let dir = tempdir().unwrap();
    evalio(dir.path())
        .args(["--format", "json", "demo", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_rubric_weight_requires_similarity_weight() {
    let dir = tempdir().unwrap();
    evalio(dir.path())
        .args(["demo", "--rubric-weight", "0.5"])
        .assert()
        .code(2);
}

#[test]
fn test_invalid_weights_rejected_before_scoring() {
    let dir = tempdir().unwrap();
    evalio(dir.path())
        .args(["demo", "--rubric-weight", "0.5", "--similarity-weight", "0.6"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("sum to 1.0"));
}

#[test]
fn test_invalid_weights_json_envelope() {
    let dir = tempdir().unwrap();
    evalio(dir.path())
        .args([
            "--format",
            "json",
            "demo",
            "--rubric-weight",
            "1.5",
            "--similarity-weight=-0.5",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"invalid_weights\""));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = tempdir().unwrap();
    let output = evalio(dir.path())
        .args(["--format", "json", "--verbose", "demo", "--mode", "rubric"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["method"], "rubric_based");
}
