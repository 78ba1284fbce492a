//! JSON output formatting for evaluations

use evalio_core::error::{EvalError, Result};
use evalio_core::Evaluation;

/// Output in JSON format
pub fn output_json(evaluation: &Evaluation) -> Result<()> {
    let json = serde_json::to_string_pretty(evaluation).map_err(serialization_error)?;
    println!("{}", json);
    Ok(())
}

/// Failing to write a result is not a problem with the input
fn serialization_error(err: serde_json::Error) -> EvalError {
    EvalError::Other(format!("failed to serialize evaluation: {}", err))
}
