//! Value parsers for CLI arguments

use evalio_core::format::OutputFormat;
use evalio_core::EvaluationMode;

/// Parse an output format (human, json, records)
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a scoring mode (rubric, similarity, hybrid)
pub fn parse_mode(s: &str) -> Result<EvaluationMode, String> {
    s.parse::<EvaluationMode>().map_err(|e| e.to_string())
}
