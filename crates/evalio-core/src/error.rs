//! Error types and exit codes for evalio
//!
//! Exit codes:
//! - 0: Success (every scoring outcome, including empty answers)
//! - 1: Generic failure
//! - 2: Usage or configuration error (bad flags, invalid weights)
//! - 3: Input data error (unreadable or malformed evaluation request)

mod macros;

use thiserror::Error;

/// Exit codes for the evalio CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage or configuration error (2)
    Usage = 2,
    /// Input data error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during evalio operations
#[derive(Error, Debug)]
pub enum EvalError {
    // Usage and configuration errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown mode: {0} (expected: rubric, similarity, or hybrid)")]
    UnknownMode(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid hybrid weights (rubric={rubric_weight}, similarity={similarity_weight}): {reason}")]
    InvalidWeights {
        rubric_weight: f64,
        similarity_weight: f64,
        reason: String,
    },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Input data errors (exit code 3)
    #[error("invalid rubric item {keypoint:?}: {reason}")]
    InvalidRubricItem { keypoint: String, reason: String },

    #[error("invalid evaluation request: {0}")]
    InvalidRequest(String),

    // Vector space failures, recovered inside the similarity scorer
    #[error("empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,

    #[error("after pruning, no terms remain (min_df={min_df})")]
    NoTermsRemain { min_df: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl EvalError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        EvalError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a rejected pair of hybrid weights
    pub fn invalid_weights(
        rubric_weight: f64,
        similarity_weight: f64,
        reason: impl Into<String>,
    ) -> Self {
        EvalError::InvalidWeights {
            rubric_weight,
            similarity_weight,
            reason: reason.into(),
        }
    }

    /// Create an error for a rubric item that failed validation
    pub fn invalid_rubric_item(keypoint: &str, reason: impl Into<String>) -> Self {
        EvalError::InvalidRubricItem {
            keypoint: keypoint.to_string(),
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            EvalError::UnknownFormat(_)
            | EvalError::UnknownMode(_)
            | EvalError::UsageError(_)
            | EvalError::InvalidWeights { .. }
            | EvalError::InvalidValue { .. }
            | EvalError::Toml(_) => ExitCode::Usage,

            EvalError::InvalidRubricItem { .. }
            | EvalError::InvalidRequest(_)
            | EvalError::Json(_) => ExitCode::Data,

            EvalError::EmptyVocabulary
            | EvalError::NoTermsRemain { .. }
            | EvalError::Io(_)
            | EvalError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            EvalError::UnknownFormat(_) => "unknown_format",
            EvalError::UnknownMode(_) => "unknown_mode",
            EvalError::UsageError(_) => "usage_error",
            EvalError::InvalidWeights { .. } => "invalid_weights",
            EvalError::InvalidValue { .. } => "invalid_value",
            EvalError::InvalidRubricItem { .. } => "invalid_rubric_item",
            EvalError::InvalidRequest(_) => "invalid_request",
            EvalError::EmptyVocabulary => "empty_vocabulary",
            EvalError::NoTermsRemain { .. } => "no_terms_remain",
            EvalError::Io(_) => "io_error",
            EvalError::Json(_) => "json_error",
            EvalError::Toml(_) => "toml_error",
            EvalError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for evalio operations
pub type Result<T> = std::result::Result<T, EvalError>;
