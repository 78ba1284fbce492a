//! `evalio demo` command - score the built-in photosynthesis example

use evalio_core::error::Result;
use evalio_core::{EvaluationMode, EvaluationRequest, Evaluator, RubricItem};

use crate::cli::Cli;
use crate::commands::evaluate::report;

const STUDENT_ANSWER: &str = "Photosynthesis is the process where plants convert sunlight into energy using chlorophyll in their leaves.";
const MODEL_ANSWER: &str = "Photosynthesis is the process by which plants use sunlight, water, and carbon dioxide to produce glucose and oxygen.";

/// Execute the demo command
pub fn execute(cli: &Cli, evaluator: &Evaluator, mode: EvaluationMode) -> Result<()> {
    let request = demo_request()?;
    let evaluation = evaluator.evaluate(&request, mode);
    report(cli, mode, &evaluation)
}

fn demo_request() -> Result<EvaluationRequest> {
    let items: [(&str, &[&str], f64, bool); 6] = [
        (
            "Mentions sunlight as energy source",
            &["sunlight", "light", "solar"],
            2.0,
            true,
        ),
        (
            "Identifies chlorophyll role",
            &["chlorophyll", "green pigment"],
            2.0,
            false,
        ),
        (
            "Mentions carbon dioxide as input",
            &["carbon dioxide", "CO2"],
            2.0,
            true,
        ),
        ("Mentions water as input", &["water", "H2O"], 1.0, true),
        (
            "Identifies glucose as output",
            &["glucose", "sugar", "energy"],
            2.0,
            true,
        ),
        ("Mentions oxygen as output", &["oxygen", "O2"], 1.0, true),
    ];

    let rubric = items
        .iter()
        .map(|(keypoint, keywords, weight, required)| {
            RubricItem::new(
                *keypoint,
                keywords.iter().map(|k| k.to_string()).collect(),
                *weight,
                *required,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(EvaluationRequest {
        student_answer: STUDENT_ANSWER.to_string(),
        model_answer: MODEL_ANSWER.to_string(),
        rubric,
        context: None,
    })
}
