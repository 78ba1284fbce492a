//! Term-weighted vector space over a small corpus
//!
//! Term weights are raw counts scaled by smoothed inverse document
//! frequency `ln((1 + n) / (1 + df)) + 1`; each document vector is
//! L2-normalized so cosine similarity reduces to a dot product.

use std::collections::{BTreeMap, HashMap};

use crate::error::{EvalError, Result};
use crate::text::{ngrams, tokenize_with_stemming};

/// Sparse document vector: vocabulary index -> weight
pub type SparseVector = HashMap<usize, f64>;

/// Vectorizer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorizerOptions {
    pub ngram_min: usize,
    pub ngram_max: usize,
    pub min_df: usize,
    pub stemming: bool,
}

/// A vector space fitted to one corpus
#[derive(Debug, Clone)]
pub struct FittedSpace {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
}

impl FittedSpace {
    /// Fit the space to `corpus` and project every document into it
    pub fn fit(corpus: &[&str], options: &VectorizerOptions) -> Result<Self> {
        let documents: Vec<Vec<String>> = corpus
            .iter()
            .map(|doc| analyze(doc, options))
            .collect();

        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for terms in &documents {
            let mut seen: Vec<&str> = terms.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(EvalError::EmptyVocabulary);
        }

        // BTreeMap iteration keeps vocabulary indices in sorted term order
        let vocabulary: BTreeMap<String, usize> = document_frequency
            .iter()
            .filter(|(_, df)| **df >= options.min_df)
            .enumerate()
            .map(|(index, (term, _))| (term.to_string(), index))
            .collect();

        if vocabulary.is_empty() {
            return Err(EvalError::NoTermsRemain {
                min_df: options.min_df,
            });
        }

        let n_docs = corpus.len() as f64;
        let mut idf = vec![0.0; vocabulary.len()];
        for (term, index) in &vocabulary {
            let df = document_frequency.get(term.as_str()).copied().unwrap_or(0) as f64;
            idf[*index] = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;
        }

        let vectors = documents
            .iter()
            .map(|terms| weigh(terms, &vocabulary, &idf))
            .collect();

        Ok(FittedSpace {
            vocabulary,
            idf,
            vectors,
        })
    }

    /// Number of terms kept in the vocabulary
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Inverse document frequency of a term, if it is in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|index| self.idf[*index])
    }

    /// Normalized vector of the document at `index` in the fitted corpus
    pub fn vector(&self, index: usize) -> Option<&SparseVector> {
        self.vectors.get(index)
    }
}

/// Tokenize one document and expand it into the configured n-gram span
fn analyze(document: &str, options: &VectorizerOptions) -> Vec<String> {
    let tokens = tokenize_with_stemming(document, options.stemming);
    ngrams(&tokens, options.ngram_min, options.ngram_max)
}

fn weigh(terms: &[String], vocabulary: &BTreeMap<String, usize>, idf: &[f64]) -> SparseVector {
    let mut vector = SparseVector::new();
    for term in terms {
        if let Some(index) = vocabulary.get(term) {
            *vector.entry(*index).or_insert(0.0) += 1.0;
        }
    }

    for (index, weight) in vector.iter_mut() {
        *weight *= idf[*index];
    }

    let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.values_mut() {
            *weight /= norm;
        }
    }

    vector
}

/// Cosine similarity between two sparse vectors; zero vectors score 0.0
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let dot: f64 = small
        .iter()
        .filter_map(|(index, weight)| large.get(index).map(|other| weight * other))
        .sum();

    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
