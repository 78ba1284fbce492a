//! Rubric scorer: keyword matching with weighted partial credit
//!
//! Each rubric item earns `weight * matched / total` points, where the
//! ratio is the share of the item's keywords found in the student answer.
//! The model answer is accepted for context only and never changes the
//! arithmetic.

use std::collections::HashMap;
use std::time::Instant;

use regex::Regex;

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};
use crate::numeric::round2;
use crate::text::{is_blank, normalize, word_pattern};
use crate::trace_time;

/// One gradable concept in a rubric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRubricItem")]
pub struct RubricItem {
    /// Label of the concept
    pub keypoint: String,
    /// Trigger keywords, in rubric order
    pub keywords: Vec<String>,
    /// Points available for this item
    pub weight: f64,
    /// Informational only; scoring ignores it
    pub required: bool,
}

#[derive(Deserialize)]
struct RawRubricItem {
    keypoint: String,
    #[serde(default)]
    keywords: Vec<String>,
    weight: f64,
    #[serde(default)]
    required: bool,
}

impl TryFrom<RawRubricItem> for RubricItem {
    type Error = EvalError;

    fn try_from(raw: RawRubricItem) -> Result<Self> {
        RubricItem::new(raw.keypoint, raw.keywords, raw.weight, raw.required)
    }
}

impl RubricItem {
    /// Create a rubric item, rejecting non-positive or non-finite weights
    pub fn new(
        keypoint: impl Into<String>,
        keywords: Vec<String>,
        weight: f64,
        required: bool,
    ) -> Result<Self> {
        let keypoint = keypoint.into();
        if keypoint.trim().is_empty() {
            return Err(EvalError::invalid_rubric_item(
                &keypoint,
                "keypoint label must not be empty",
            ));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(EvalError::invalid_rubric_item(
                &keypoint,
                format!("weight must be a positive number, got {}", weight),
            ));
        }
        Ok(RubricItem {
            keypoint,
            keywords,
            weight,
            required,
        })
    }
}

/// Outcome classification for a single rubric item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Every keyword matched
    Complete,
    /// Some but not all keywords matched
    Partial,
    /// No keyword matched
    Missing,
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::Complete => write!(f, "complete"),
            ItemStatus::Partial => write!(f, "partial"),
            ItemStatus::Missing => write!(f, "missing"),
        }
    }
}

/// Per-item scoring result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResult {
    pub keypoint: String,
    pub weight: f64,
    pub earned: f64,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub status: ItemStatus,
    pub required: bool,
}

/// Aggregate rubric scoring result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricResult {
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub matched_keypoints: Vec<String>,
    pub missing_keypoints: Vec<String>,
    pub breakdown: Vec<ItemResult>,
}

/// Keyword-based rubric scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RubricScorer {
    case_sensitive: bool,
    partial_match: bool,
}

impl Default for RubricScorer {
    fn default() -> Self {
        RubricScorer::new(false, true)
    }
}

impl RubricScorer {
    /// Create a scorer.
    ///
    /// With `partial_match` a keyword matches anywhere as a substring
    /// ("photo" matches "photosynthesis"); without it only whole-word
    /// occurrences count.
    pub fn new(case_sensitive: bool, partial_match: bool) -> Self {
        RubricScorer {
            case_sensitive,
            partial_match,
        }
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn partial_match(&self) -> bool {
        self.partial_match
    }

    /// Test each keyword against the answer.
    ///
    /// Returns one `(keyword, found)` pair per input keyword in input order;
    /// duplicate keywords are tested and reported separately.
    pub fn keyword_match(&self, keywords: &[String], answer: &str) -> Vec<(String, bool)> {
        let normalized_answer = normalize(answer, self.case_sensitive);
        self.match_normalized(keywords, &normalized_answer)
    }

    /// Match against an answer that is already normalized.
    ///
    /// In exact mode each distinct keyword compiles its word pattern once.
    fn match_normalized(&self, keywords: &[String], normalized_answer: &str) -> Vec<(String, bool)> {
        let mut patterns: HashMap<String, Option<Regex>> = HashMap::new();

        keywords
            .iter()
            .map(|keyword| {
                let normalized_keyword = normalize(keyword, self.case_sensitive);
                let found = if self.partial_match {
                    normalized_answer.contains(&normalized_keyword)
                } else {
                    patterns
                        .entry(normalized_keyword)
                        .or_insert_with_key(|needle| word_pattern(needle))
                        .as_ref()
                        .is_some_and(|re| re.is_match(normalized_answer))
                };
                (keyword.clone(), found)
            })
            .collect()
    }

    /// Score a student answer against a weighted rubric
    pub fn score_answer(
        &self,
        student_answer: &str,
        _model_answer: &str,
        rubric: &[RubricItem],
    ) -> RubricResult {
        let start = Instant::now();
        let max_score: f64 = rubric.iter().map(|item| item.weight).sum();

        if is_blank(student_answer) {
            tracing::debug!(items = rubric.len(), max_score, "empty answer, rubric skipped");
            return RubricResult {
                score: 0.0,
                max_score,
                percentage: 0.0,
                matched_keypoints: Vec::new(),
                missing_keypoints: rubric.iter().map(|item| item.keypoint.clone()).collect(),
                breakdown: Vec::new(),
            };
        }

        let mut total_score = 0.0;
        let mut matched_keypoints = Vec::new();
        let mut missing_keypoints = Vec::new();
        let mut breakdown = Vec::with_capacity(rubric.len());
        let normalized_answer = normalize(student_answer, self.case_sensitive);

        for item in rubric {
            let result = self.score_item(item, &normalized_answer);
            total_score += result.earned;

            match result.status {
                ItemStatus::Missing => missing_keypoints.push(item.keypoint.clone()),
                ItemStatus::Complete | ItemStatus::Partial => {
                    matched_keypoints.push(item.keypoint.clone())
                }
            }

            breakdown.push(ItemResult {
                earned: round2(result.earned),
                ..result
            });
        }

        let percentage = if max_score > 0.0 {
            total_score / max_score * 100.0
        } else {
            0.0
        };

        tracing::debug!(
            items = rubric.len(),
            matched = matched_keypoints.len(),
            missing = missing_keypoints.len(),
            score = total_score,
            max_score,
            "rubric scored"
        );
        trace_time!(start, "score_rubric");

        RubricResult {
            score: round2(total_score),
            max_score,
            percentage: round2(percentage),
            matched_keypoints,
            missing_keypoints,
            breakdown,
        }
    }

    /// Score one item; `earned` is left unrounded
    fn score_item(&self, item: &RubricItem, normalized_answer: &str) -> ItemResult {
        let matches = self.match_normalized(&item.keywords, normalized_answer);

        let (matched, missing): (Vec<_>, Vec<_>) =
            matches.into_iter().partition(|(_, found)| *found);
        let matched_keywords: Vec<String> = matched.into_iter().map(|(kw, _)| kw).collect();
        let missing_keywords: Vec<String> = missing.into_iter().map(|(kw, _)| kw).collect();

        let coverage = if item.keywords.is_empty() {
            0.0
        } else {
            matched_keywords.len() as f64 / item.keywords.len() as f64
        };

        let status = if matched_keywords.is_empty() {
            ItemStatus::Missing
        } else if missing_keywords.is_empty() {
            ItemStatus::Complete
        } else {
            ItemStatus::Partial
        };

        ItemResult {
            keypoint: item.keypoint.clone(),
            weight: item.weight,
            earned: item.weight * coverage,
            matched_keywords,
            missing_keywords,
            status,
            required: item.required,
        }
    }
}
