//! Similarity scorer comparing a student answer with the model answer
//!
//! Builds a fresh TF-IDF space per call from the model answer, the student
//! answer and any extra context documents, then reports the cosine between
//! the model and student vectors with an interpretation tier and a
//! length-based confidence heuristic.

mod tfidf;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};
use crate::numeric::{round2, round4};
use crate::text::{is_blank, word_count};
use crate::{bail_invalid, trace_time};

pub use tfidf::{cosine_similarity, FittedSpace, SparseVector, VectorizerOptions};

/// Ordinal band for a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    ExcellentMatch,
    GoodMatch,
    ModerateMatch,
    WeakMatch,
    PoorMatch,
    /// The student answer was empty
    EmptyAnswer,
    /// The vector space could not be built
    CalculationError,
}

impl Interpretation {
    /// Map a score in `[0, 1]` to its tier; lower bounds are inclusive
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            Interpretation::ExcellentMatch
        } else if score >= 0.7 {
            Interpretation::GoodMatch
        } else if score >= 0.5 {
            Interpretation::ModerateMatch
        } else if score >= 0.3 {
            Interpretation::WeakMatch
        } else {
            Interpretation::PoorMatch
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Interpretation::ExcellentMatch => "excellent_match",
            Interpretation::GoodMatch => "good_match",
            Interpretation::ModerateMatch => "moderate_match",
            Interpretation::WeakMatch => "weak_match",
            Interpretation::PoorMatch => "poor_match",
            Interpretation::EmptyAnswer => "empty_answer",
            Interpretation::CalculationError => "calculation_error",
        }
    }
}

impl std::fmt::Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a similarity comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub similarity_score: f64,
    pub percentage: f64,
    pub confidence: f64,
    pub interpretation: Interpretation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SimilarityResult {
    fn empty_answer() -> Self {
        SimilarityResult {
            similarity_score: 0.0,
            percentage: 0.0,
            confidence: 1.0,
            interpretation: Interpretation::EmptyAnswer,
            error: None,
        }
    }

    fn calculation_error(err: &EvalError) -> Self {
        SimilarityResult {
            similarity_score: 0.0,
            percentage: 0.0,
            confidence: 0.5,
            interpretation: Interpretation::CalculationError,
            error: Some(err.to_string()),
        }
    }
}

/// TF-IDF cosine similarity scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityScorer {
    options: VectorizerOptions,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        SimilarityScorer {
            options: VectorizerOptions {
                ngram_min: 1,
                ngram_max: 2,
                min_df: 1,
                stemming: false,
            },
        }
    }
}

impl SimilarityScorer {
    /// Create a scorer over the n-gram span `ngram_min..=ngram_max`
    pub fn new(ngram_min: usize, ngram_max: usize, min_df: usize) -> Result<Self> {
        if ngram_min == 0 || ngram_min > ngram_max {
            bail_invalid!("ngram range", format!("({}, {})", ngram_min, ngram_max));
        }
        if min_df == 0 {
            bail_invalid!("min_df", min_df);
        }
        Ok(SimilarityScorer {
            options: VectorizerOptions {
                ngram_min,
                ngram_max,
                min_df,
                stemming: false,
            },
        })
    }

    /// Enable or disable English stemming before n-gram assembly
    pub fn with_stemming(mut self, stemming: bool) -> Self {
        self.options.stemming = stemming;
        self
    }

    pub fn options(&self) -> &VectorizerOptions {
        &self.options
    }

    /// Compare the student answer with the model answer.
    ///
    /// Never fails: a degenerate vocabulary comes back as a
    /// `calculation_error` result carrying the diagnostic message.
    pub fn calculate_similarity(
        &self,
        student_answer: &str,
        model_answer: &str,
        additional_context: Option<&[String]>,
    ) -> SimilarityResult {
        if is_blank(student_answer) {
            tracing::debug!("empty answer, similarity skipped");
            return SimilarityResult::empty_answer();
        }

        match self.try_similarity(student_answer, model_answer, additional_context) {
            Ok(similarity) => {
                let interpretation = Interpretation::from_score(similarity);
                let confidence = length_confidence(student_answer, model_answer);

                tracing::debug!(
                    similarity,
                    confidence,
                    interpretation = interpretation.as_str(),
                    "similarity scored"
                );

                SimilarityResult {
                    similarity_score: round4(similarity),
                    percentage: round2(similarity * 100.0),
                    confidence: round4(confidence),
                    interpretation,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "similarity calculation failed");
                SimilarityResult::calculation_error(&e)
            }
        }
    }

    /// Clamped cosine between model (document 0) and student (document 1)
    fn try_similarity(
        &self,
        student_answer: &str,
        model_answer: &str,
        additional_context: Option<&[String]>,
    ) -> Result<f64> {
        let start = Instant::now();

        let mut corpus: Vec<&str> = vec![model_answer, student_answer];
        if let Some(context) = additional_context {
            corpus.extend(context.iter().map(String::as_str));
        }

        let space = FittedSpace::fit(&corpus, &self.options)?;
        trace_time!(start, "fit_vector_space", vocabulary = space.vocabulary_len());

        let (model_vector, student_vector) = match (space.vector(0), space.vector(1)) {
            (Some(model), Some(student)) => (model, student),
            _ => return Err(EvalError::Other("corpus lost its answer documents".into())),
        };

        let similarity = cosine_similarity(model_vector, student_vector);
        Ok(similarity.clamp(0.0, 1.0))
    }
}

/// Heuristic reliability of a similarity judgment based on answer length.
///
/// Short answers are penalized (x0.6 under 5 words, x0.8 under 10), and
/// independently so are answers far longer (ratio > 3.0, x0.7) or far
/// shorter (ratio < 0.3, x0.8) than the model answer.
pub fn length_confidence(student_answer: &str, model_answer: &str) -> f64 {
    let student_words = word_count(student_answer);
    let model_words = word_count(model_answer);

    let mut confidence = 1.0;

    if student_words < 5 {
        confidence *= 0.6;
    } else if student_words < 10 {
        confidence *= 0.8;
    }

    if model_words > 0 {
        let length_ratio = student_words as f64 / model_words as f64;
        if length_ratio > 3.0 {
            confidence *= 0.7;
        } else if length_ratio < 0.3 {
            confidence *= 0.8;
        }
    }

    confidence
}
