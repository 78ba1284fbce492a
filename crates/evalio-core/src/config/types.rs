//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::evaluate::EvaluationMode;

/// Top-level evaluation configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Mode used when the caller does not pick one
    #[serde(default)]
    pub default_mode: EvaluationMode,

    /// Rubric scorer settings
    #[serde(default)]
    pub rubric: RubricConfig,

    /// Similarity scorer settings
    #[serde(default)]
    pub similarity: SimilarityConfig,

    /// Hybrid combiner weights
    #[serde(default)]
    pub hybrid: HybridConfig,
}

/// Keyword matching behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricConfig {
    /// Match keywords case-sensitively (default false)
    #[serde(default)]
    pub case_sensitive: bool,

    /// Substring matching; false requires whole-word matches (default true)
    #[serde(default = "default_partial_match")]
    pub partial_match: bool,
}

/// Vector space construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Smallest n-gram size (default 1)
    #[serde(default = "default_ngram_min")]
    pub ngram_min: usize,

    /// Largest n-gram size (default 2)
    #[serde(default = "default_ngram_max")]
    pub ngram_max: usize,

    /// Minimum number of documents a term must appear in (default 1)
    #[serde(default = "default_min_df")]
    pub min_df: usize,

    /// Apply English stemming before building n-grams (default false)
    #[serde(default)]
    pub stemming: bool,
}

/// Blend weights for hybrid mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridConfig {
    /// Weight of the rubric percentage (default 0.6)
    #[serde(default = "default_rubric_weight")]
    pub rubric_weight: f64,

    /// Weight of the similarity percentage (default 0.4)
    #[serde(default = "default_similarity_weight")]
    pub similarity_weight: f64,
}

fn default_partial_match() -> bool {
    true
}

fn default_ngram_min() -> usize {
    1
}

fn default_ngram_max() -> usize {
    2
}

fn default_min_df() -> usize {
    1
}

fn default_rubric_weight() -> f64 {
    0.6
}

fn default_similarity_weight() -> f64 {
    0.4
}

impl Default for RubricConfig {
    fn default() -> Self {
        RubricConfig {
            case_sensitive: false,
            partial_match: default_partial_match(),
        }
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        SimilarityConfig {
            ngram_min: default_ngram_min(),
            ngram_max: default_ngram_max(),
            min_df: default_min_df(),
            stemming: false,
        }
    }
}

impl Default for HybridConfig {
    fn default() -> Self {
        HybridConfig {
            rubric_weight: default_rubric_weight(),
            similarity_weight: default_similarity_weight(),
        }
    }
}
