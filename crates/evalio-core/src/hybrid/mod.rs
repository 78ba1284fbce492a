//! Hybrid combiner fusing rubric and similarity results
//!
//! The final percentage is a weighted blend of the two component
//! percentages. Confidence is the plain mean of the component confidences,
//! independent of the score weights.

use serde::{Deserialize, Serialize};

use crate::bail_weights;
use crate::error::Result;
use crate::numeric::{round2, round4};
use crate::rubric::RubricResult;
use crate::similarity::SimilarityResult;

/// Allowed deviation of `rubric_weight + similarity_weight` from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// A scored component that can feed the combiner
pub trait ScoredComponent {
    /// Score as a percentage in `[0, 100]`
    fn percentage(&self) -> f64;

    /// Component confidence; `None` is treated as 1.0
    fn confidence(&self) -> Option<f64> {
        None
    }
}

impl ScoredComponent for RubricResult {
    fn percentage(&self) -> f64 {
        self.percentage
    }
}

impl ScoredComponent for SimilarityResult {
    fn percentage(&self) -> f64 {
        self.percentage
    }

    fn confidence(&self) -> Option<f64> {
        Some(self.confidence)
    }
}

/// Validated pair of blend weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HybridWeights {
    rubric_weight: f64,
    similarity_weight: f64,
}

impl Default for HybridWeights {
    fn default() -> Self {
        HybridWeights {
            rubric_weight: 0.6,
            similarity_weight: 0.4,
        }
    }
}

impl HybridWeights {
    /// Validate a weight pair: each in `[0, 1]`, summing to 1.0 within
    /// [`WEIGHT_SUM_TOLERANCE`]
    pub fn new(rubric_weight: f64, similarity_weight: f64) -> Result<Self> {
        let unit = 0.0..=1.0;
        if !unit.contains(&rubric_weight) || !unit.contains(&similarity_weight) {
            bail_weights!(
                rubric_weight,
                similarity_weight,
                "weights must be between 0 and 1"
            );
        }

        let total = rubric_weight + similarity_weight;
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            bail_weights!(
                rubric_weight,
                similarity_weight,
                format!("weights must sum to 1.0, got {}", total)
            );
        }

        Ok(HybridWeights {
            rubric_weight,
            similarity_weight,
        })
    }

    pub fn rubric_weight(&self) -> f64 {
        self.rubric_weight
    }

    pub fn similarity_weight(&self) -> f64 {
        self.similarity_weight
    }
}

/// One side of the blend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub percentage: f64,
    pub weight: f64,
    pub contribution: f64,
}

impl ComponentScore {
    fn new(percentage: f64, weight: f64) -> Self {
        ComponentScore {
            percentage,
            weight,
            contribution: round2(percentage * weight),
        }
    }
}

/// Combined evaluation with the full detail of both inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridResult {
    pub final_percentage: f64,
    pub rubric_component: ComponentScore,
    pub similarity_component: ComponentScore,
    pub confidence: f64,
    pub rubric_details: RubricResult,
    pub similarity_details: SimilarityResult,
}

/// Weighted combiner; weights are validated once at construction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HybridScorer {
    weights: HybridWeights,
}

impl HybridScorer {
    /// Build a combiner, failing on an invalid weight pair
    pub fn new(rubric_weight: f64, similarity_weight: f64) -> Result<Self> {
        Ok(HybridScorer {
            weights: HybridWeights::new(rubric_weight, similarity_weight)?,
        })
    }

    pub fn with_weights(weights: HybridWeights) -> Self {
        HybridScorer { weights }
    }

    pub fn weights(&self) -> &HybridWeights {
        &self.weights
    }

    /// Blend the two results into a single percentage
    pub fn combine_scores(
        &self,
        rubric_result: &RubricResult,
        similarity_result: &SimilarityResult,
    ) -> HybridResult {
        let rubric_percentage = rubric_result.percentage();
        let similarity_percentage = similarity_result.percentage();

        let final_percentage = rubric_percentage * self.weights.rubric_weight
            + similarity_percentage * self.weights.similarity_weight;

        let rubric_confidence = rubric_result.confidence().unwrap_or(1.0);
        let similarity_confidence = similarity_result.confidence().unwrap_or(1.0);
        let confidence = (rubric_confidence + similarity_confidence) / 2.0;

        tracing::debug!(
            rubric_percentage,
            similarity_percentage,
            final_percentage,
            confidence,
            "hybrid combined"
        );

        HybridResult {
            final_percentage: round2(final_percentage),
            rubric_component: ComponentScore::new(rubric_percentage, self.weights.rubric_weight),
            similarity_component: ComponentScore::new(
                similarity_percentage,
                self.weights.similarity_weight,
            ),
            confidence: round4(confidence),
            rubric_details: rubric_result.clone(),
            similarity_details: similarity_result.clone(),
        }
    }
}
