use crate::cli::support::{evalio, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_demo_human_default_is_hybrid() {
    let dir = tempdir().unwrap();
    evalio(dir.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("EVALUATION RESULT"))
        .stdout(predicate::str::contains("Method: hybrid_rubric_similarity"))
        .stdout(predicate::str::contains("✗ Mentions water as input"))
        .stdout(predicate::str::contains("◐ Identifies glucose as output"));
}

#[test]
fn test_demo_quiet_drops_banner() {
    let dir = tempdir().unwrap();
    evalio(dir.path())
        .args(["--quiet", "demo", "--mode", "rubric"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EVALUATION RESULT").not())
        .stdout(predicate::str::contains("Score: 30.00%"))
        .stdout(predicate::str::contains("Matched:").not())
        .stdout(predicate::str::contains("Missing:").not());
}

#[test]
fn test_demo_breakdown_lists_keywords() {
    let dir = tempdir().unwrap();
    evalio(dir.path())
        .args(["demo", "--mode", "rubric"])
        .assert()
        .success()
        .stdout(predicate::str::contains("      Matched: sunlight, light"))
        .stdout(predicate::str::contains("      Missing: solar"))
        .stdout(predicate::str::contains("      Missing: water, H2O"));
}

#[test]
fn test_demo_rubric_json() {
    let dir = tempdir().unwrap();
    let output = evalio(dir.path())
        .args(["--format", "json", "demo", "--mode", "rubric"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json["method"], "rubric_based");
    assert_eq!(json["confidence"], 1.0);
    assert_eq!(json["score"], 3.0);
    assert_eq!(json["max_score"], 10.0);
    assert_eq!(json["percentage"], 30.0);
    assert_eq!(
        json["missing_keypoints"],
        serde_json::json!([
            "Mentions carbon dioxide as input",
            "Mentions water as input",
            "Mentions oxygen as output"
        ])
    );
    assert_eq!(json["breakdown"].as_array().unwrap().len(), 6);
    assert_eq!(json["breakdown"][0]["status"], "partial");
    assert_eq!(json["breakdown"][0]["earned"], 1.33);
}

#[test]
fn test_demo_similarity_json() {
    let dir = tempdir().unwrap();
    let output = evalio(dir.path())
        .args(["--format", "json", "demo", "--mode", "similarity"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json["method"], "tfidf_cosine");
    let score = json["similarity_score"].as_f64().unwrap();
    assert!(score > 0.0 && score < 1.0);
    assert!(json.get("error").is_none());
}

#[test]
fn test_demo_hybrid_with_rubric_only_weights() {
    let dir = tempdir().unwrap();
    let output = evalio(dir.path())
        .args([
            "--format",
            "json",
            "demo",
            "--rubric-weight",
            "1.0",
            "--similarity-weight",
            "0.0",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json["method"], "hybrid_rubric_similarity");
    assert_eq!(json["final_percentage"], 30.0);
    assert_eq!(json["rubric_component"]["weight"], 1.0);
    assert_eq!(json["similarity_component"]["contribution"], 0.0);
}

#[test]
fn test_demo_records_rubric() {
    let dir = tempdir().unwrap();
    let output = evalio(dir.path())
        .args(["--format", "records", "demo", "--mode", "rubric"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("H evalio=1 records=1 mode=rubric method=rubric_based"));
    assert!(lines[1].starts_with("R score=3 max=10 percentage=30.00"));
    assert_eq!(lines.iter().filter(|l| l.starts_with("K ")).count(), 6);
    assert!(!stdout.contains("\nS "));
    assert!(stdout.contains(r#"K "Mentions carbon dioxide as input" earned=0"#));
}

#[test]
fn test_demo_records_hybrid_has_all_records() {
    let dir = tempdir().unwrap();
    let output = evalio(dir.path())
        .args(["--format", "records", "demo"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for prefix in ["H ", "R ", "K ", "S ", "C "] {
        assert!(
            stdout.lines().any(|l| l.starts_with(prefix)),
            "missing {} record",
            prefix.trim()
        );
    }
    assert!(stdout.contains("rubric_weight=0.6"));
}
