use assert_cmd::{cargo::cargo_bin_cmd, Command};
use serde_json::Value;
use std::path::Path;

/// Get a Command for evalio, isolated from any user configuration
pub fn evalio(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("evalio");
    cmd.env("EVALIO_CONFIG_DIR", config_dir)
        .env_remove("EVALIO_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("EVALIO_LOG");
    cmd
}

/// Parse stdout bytes as a JSON document
pub fn stdout_json(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("stdout should be valid JSON")
}

/// A small request with two rubric items and a related model answer
pub const SIMPLE_REQUEST: &str = r#"{
    "student_answer": "Plants use sunlight and water to grow.",
    "model_answer": "Plants use sunlight, water and carbon dioxide to make glucose.",
    "rubric": [
        {"keypoint": "Sunlight", "keywords": ["sunlight", "light"], "weight": 2, "required": true},
        {"keypoint": "Carbon dioxide", "keywords": ["carbon dioxide", "co2"], "weight": 1}
    ]
}"#;
