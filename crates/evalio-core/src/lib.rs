//! Evalio Core Library
//!
//! Scoring engine for free-text answers: a rubric keyword scorer with
//! partial credit, a TF-IDF cosine similarity scorer, and a hybrid
//! combiner that blends the two.

pub mod config;
pub mod error;
pub mod evaluate;
pub mod format;
pub mod hybrid;
pub mod logging;
pub mod numeric;
pub mod records;
pub mod rubric;
pub mod similarity;
pub mod text;

pub use evaluate::{Evaluation, EvaluationMode, EvaluationRequest, Evaluator};
pub use hybrid::{HybridResult, HybridScorer, HybridWeights};
pub use rubric::{ItemResult, ItemStatus, RubricItem, RubricResult, RubricScorer};
pub use similarity::{Interpretation, SimilarityResult, SimilarityScorer};

/// Score an answer against a rubric with default matching settings
pub fn score_rubric(
    student_answer: &str,
    model_answer: &str,
    rubric: &[RubricItem],
) -> RubricResult {
    RubricScorer::default().score_answer(student_answer, model_answer, rubric)
}

/// Compare an answer with the model answer using the default vector space
pub fn score_similarity(
    student_answer: &str,
    model_answer: &str,
    context: Option<&[String]>,
) -> SimilarityResult {
    SimilarityScorer::default().calculate_similarity(student_answer, model_answer, context)
}

/// Blend two component results; `None` uses the default 0.6 / 0.4 weights
pub fn combine(
    rubric_result: &RubricResult,
    similarity_result: &SimilarityResult,
    weights: Option<HybridWeights>,
) -> HybridResult {
    HybridScorer::with_weights(weights.unwrap_or_default())
        .combine_scores(rubric_result, similarity_result)
}

/// Evaluate a request in the given mode with default configuration
pub fn evaluate(request: &EvaluationRequest, mode: EvaluationMode) -> Evaluation {
    Evaluator::default().evaluate(request, mode)
}
