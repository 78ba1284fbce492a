use crate::cli::support::{evalio, stdout_json, SIMPLE_REQUEST};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_explicit_config_sets_default_mode() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "default_mode = \"rubric\"\n").unwrap();

    let output = evalio(dir.path())
        .args(["--format", "json", "--config"])
        .arg(&config)
        .arg("demo")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json["method"], "rubric_based");
}

#[test]
fn test_mode_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "default_mode = \"rubric\"\n").unwrap();

    let output = evalio(dir.path())
        .env("EVALIO_CONFIG", &config)
        .args(["--format", "json", "demo", "--mode", "similarity"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output.stdout)["method"], "tfidf_cosine");
}

#[test]
fn test_discovered_config_weights() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[hybrid]\nrubric_weight = 0.0\nsimilarity_weight = 1.0\n",
    )
    .unwrap();

    let output = evalio(dir.path())
        .args(["--format", "json", "evaluate"])
        .write_stdin(SIMPLE_REQUEST)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json["rubric_component"]["weight"], 0.0);
    assert_eq!(
        json["final_percentage"],
        json["similarity_details"]["percentage"]
    );
}

#[test]
fn test_case_sensitive_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[rubric]\ncase_sensitive = true\n").unwrap();
    let request = r#"{
        "student_answer": "plants need SUNLIGHT",
        "rubric": [{"keypoint": "Sunlight", "keywords": ["sunlight"], "weight": 1}]
    }"#;

    let output = evalio(dir.path())
        .args(["--format", "json", "evaluate", "--mode", "rubric"])
        .write_stdin(request)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output.stdout)["score"], 0.0);
}

#[test]
fn test_config_with_bad_weights_exit_code_2() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[hybrid]\nrubric_weight = 0.5\nsimilarity_weight = 0.6\n",
    )
    .unwrap();

    evalio(dir.path())
        .arg("demo")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("sum to 1.0"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();
    evalio(dir.path())
        .args(["--config"])
        .arg(dir.path().join("nope.toml"))
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}
