//! Evaluation orchestrator: picks a mode and runs the scorers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::EvalConfig;
use crate::error::{EvalError, Result};
use crate::hybrid::{HybridResult, HybridScorer};
use crate::rubric::{RubricItem, RubricResult, RubricScorer};
use crate::similarity::{SimilarityResult, SimilarityScorer};

/// Rubric scoring is deterministic keyword arithmetic
pub const RUBRIC_CONFIDENCE: f64 = 1.0;

/// Which scorers an evaluation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    /// Keyword rubric only
    Rubric,
    /// TF-IDF similarity only
    Similarity,
    /// Both scorers, blended
    #[default]
    Hybrid,
}

impl FromStr for EvaluationMode {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rubric" => Ok(EvaluationMode::Rubric),
            "similarity" => Ok(EvaluationMode::Similarity),
            "hybrid" => Ok(EvaluationMode::Hybrid),
            other => Err(EvalError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationMode::Rubric => write!(f, "rubric"),
            EvaluationMode::Similarity => write!(f, "similarity"),
            EvaluationMode::Hybrid => write!(f, "hybrid"),
        }
    }
}

/// One answer to evaluate
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub student_answer: String,
    #[serde(default)]
    pub model_answer: String,
    #[serde(default)]
    pub rubric: Vec<RubricItem>,
    /// Extra documents that shape term weighting in the similarity space
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<String>>,
}

impl EvaluationRequest {
    /// Parse a request from a JSON document
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| EvalError::InvalidRequest(e.to_string()))
    }
}

/// Outcome of an evaluation, tagged with the method that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "method")]
pub enum Evaluation {
    #[serde(rename = "rubric_based")]
    Rubric {
        #[serde(flatten)]
        result: RubricResult,
        confidence: f64,
    },
    #[serde(rename = "tfidf_cosine")]
    Similarity(SimilarityResult),
    #[serde(rename = "hybrid_rubric_similarity")]
    Hybrid(HybridResult),
}

impl Evaluation {
    /// Method label matching the serialized `method` tag
    pub fn method(&self) -> &'static str {
        match self {
            Evaluation::Rubric { .. } => "rubric_based",
            Evaluation::Similarity(_) => "tfidf_cosine",
            Evaluation::Hybrid(_) => "hybrid_rubric_similarity",
        }
    }

    /// Headline percentage for this evaluation
    pub fn percentage(&self) -> f64 {
        match self {
            Evaluation::Rubric { result, .. } => result.percentage,
            Evaluation::Similarity(result) => result.percentage,
            Evaluation::Hybrid(result) => result.final_percentage,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            Evaluation::Rubric { confidence, .. } => *confidence,
            Evaluation::Similarity(result) => result.confidence,
            Evaluation::Hybrid(result) => result.confidence,
        }
    }
}

/// Read-only bundle of configured scorers, built once and reused
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Evaluator {
    rubric: RubricScorer,
    similarity: SimilarityScorer,
    hybrid: HybridScorer,
}

impl Evaluator {
    pub fn new(rubric: RubricScorer, similarity: SimilarityScorer, hybrid: HybridScorer) -> Self {
        Evaluator {
            rubric,
            similarity,
            hybrid,
        }
    }

    /// Build every scorer from configuration; invalid weights fail here
    pub fn from_config(config: &EvalConfig) -> Result<Self> {
        Ok(Evaluator {
            rubric: config.rubric_scorer(),
            similarity: config.similarity_scorer()?,
            hybrid: config.hybrid_scorer()?,
        })
    }

    pub fn hybrid(&self) -> &HybridScorer {
        &self.hybrid
    }

    /// Replace the combiner, keeping the other scorers
    pub fn with_hybrid(self, hybrid: HybridScorer) -> Self {
        Evaluator { hybrid, ..self }
    }

    /// Evaluate one request in the given mode
    pub fn evaluate(&self, request: &EvaluationRequest, mode: EvaluationMode) -> Evaluation {
        tracing::debug!(
            %mode,
            rubric_items = request.rubric.len(),
            context_docs = request.context.as_ref().map_or(0, Vec::len),
            "evaluate"
        );

        match mode {
            EvaluationMode::Rubric => Evaluation::Rubric {
                result: self.score_rubric(request),
                confidence: RUBRIC_CONFIDENCE,
            },
            EvaluationMode::Similarity => Evaluation::Similarity(self.score_similarity(request)),
            EvaluationMode::Hybrid => {
                let rubric = self.score_rubric(request);
                let similarity = self.score_similarity(request);
                Evaluation::Hybrid(self.hybrid.combine_scores(&rubric, &similarity))
            }
        }
    }

    fn score_rubric(&self, request: &EvaluationRequest) -> RubricResult {
        self.rubric
            .score_answer(&request.student_answer, &request.model_answer, &request.rubric)
    }

    fn score_similarity(&self, request: &EvaluationRequest) -> SimilarityResult {
        self.similarity.calculate_similarity(
            &request.student_answer,
            &request.model_answer,
            request.context.as_deref(),
        )
    }
}
