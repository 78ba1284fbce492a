//! `evalio evaluate` command - score a JSON request from a file or stdin

pub mod format;

use std::fs;
use std::io::{self, Read};

use evalio_core::error::{EvalError, Result};
use evalio_core::{Evaluation, EvaluationMode, EvaluationRequest, Evaluator};

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the evaluate command
pub fn execute(cli: &Cli, evaluator: &Evaluator, mode: EvaluationMode, input: &str) -> Result<()> {
    let raw = read_input(input)?;
    let request = EvaluationRequest::from_json(&raw)?;

    tracing::debug!(
        input,
        student_chars = request.student_answer.len(),
        rubric_items = request.rubric.len(),
        "request_loaded"
    );

    let evaluation = evaluator.evaluate(&request, mode);
    report(cli, mode, &evaluation)
}

/// Print an evaluation in the selected output format
pub fn report(cli: &Cli, mode: EvaluationMode, evaluation: &Evaluation) -> Result<()> {
    output_by_format_result!(cli.format,
        json => format::output_json(evaluation),
        human => {
            format::output_human(cli, evaluation);
        },
        records => {
            format::output_records(mode, evaluation);
        }
    )
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    fs::read_to_string(input).map_err(|e| {
        EvalError::InvalidRequest(format!("failed to read request from {}: {}", input, e))
    })
}
