use crate::cli::support::{evalio, stdout_json, SIMPLE_REQUEST};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_evaluate_from_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("request.json");
    fs::write(&input, SIMPLE_REQUEST).unwrap();

    let output = evalio(dir.path())
        .args(["--format", "json", "evaluate", "--mode", "rubric", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json["method"], "rubric_based");
    assert_eq!(json["score"], 2.0);
    assert_eq!(json["max_score"], 3.0);
    assert_eq!(json["percentage"], 66.67);
    assert_eq!(json["matched_keypoints"], serde_json::json!(["Sunlight"]));
}

#[test]
fn test_evaluate_from_stdin() {
    let dir = tempdir().unwrap();
    let output = evalio(dir.path())
        .args(["--format", "json", "evaluate"])
        .write_stdin(SIMPLE_REQUEST)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json["method"], "hybrid_rubric_similarity");
    assert_eq!(json["rubric_details"]["percentage"], 66.67);
    let final_percentage = json["final_percentage"].as_f64().unwrap();
    assert!(final_percentage > 0.0 && final_percentage <= 100.0);
}

#[test]
fn test_evaluate_with_context() {
    let dir = tempdir().unwrap();
    let request = r#"{
        "student_answer": "Plants use sunlight and water.",
        "model_answer": "Plants use sunlight, water and carbon dioxide.",
        "context": ["Carbon dioxide enters leaves through the stomata."]
    }"#;

    let output = evalio(dir.path())
        .args(["--format", "json", "evaluate", "-m", "similarity"])
        .write_stdin(request)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json["method"], "tfidf_cosine");
    assert!(json["similarity_score"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_empty_answer_is_not_an_error() {
    let dir = tempdir().unwrap();
    let request = r#"{"student_answer": "   ", "model_answer": "Plants need light."}"#;

    let output = evalio(dir.path())
        .args(["--format", "json", "evaluate", "--mode", "similarity"])
        .write_stdin(request)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output.stdout);
    assert_eq!(json["interpretation"], "empty_answer");
    assert_eq!(json["confidence"], 1.0);
}

#[test]
fn test_stop_word_corpus_reports_calculation_error() {
    let dir = tempdir().unwrap();
    let request = r#"{"student_answer": "it is what it is", "model_answer": "and so on"}"#;

    let output = evalio(dir.path())
        .args(["--format", "json", "evaluate", "--mode", "similarity"])
        .write_stdin(request)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output.stdout);
    assert_eq!(json["interpretation"], "calculation_error");
    assert_eq!(json["confidence"], 0.5);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("empty vocabulary"));
}

#[test]
fn test_records_escape_quotes() {
    let dir = tempdir().unwrap();
    let request = r#"{
        "student_answer": "The \"light\" reactions happen first.",
        "model_answer": "Light reactions precede the Calvin cycle.",
        "rubric": [{"keypoint": "Names \"light\" reactions", "keywords": ["light"], "weight": 1}]
    }"#;

    evalio(dir.path())
        .args(["--format", "records", "evaluate", "--mode", "rubric"])
        .write_stdin(request)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"K "Names \"light\" reactions" earned=1"#));
}

#[test]
fn test_malformed_json_exit_code_3() {
    let dir = tempdir().unwrap();
    evalio(dir.path())
        .args(["evaluate"])
        .write_stdin("{ not json")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid evaluation request"));
}

#[test]
fn test_invalid_rubric_weight_json_envelope() {
    let dir = tempdir().unwrap();
    let request = r#"{"student_answer": "x", "rubric": [{"keypoint": "A", "keywords": ["a"], "weight": -1}]}"#;

    evalio(dir.path())
        .args(["--format", "json", "evaluate"])
        .write_stdin(request)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"invalid_request\""));
}

#[test]
fn test_missing_input_file_exit_code_3() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    evalio(dir.path())
        .args(["evaluate", "--input"])
        .arg(&missing)
        .assert()
        .code(3);
}
