//! Evaluation configuration for evalio
//!
//! Configuration lives in a TOML file. An explicit path wins; otherwise
//! `$EVALIO_CONFIG_DIR/config.toml` or `~/.config/evalio/config.toml` is
//! used when present, and built-in defaults apply when nothing is found.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EvalError, Result};
use crate::hybrid::{HybridScorer, HybridWeights};
use crate::rubric::RubricScorer;
use crate::similarity::SimilarityScorer;

pub use types::{EvalConfig, HybridConfig, RubricConfig, SimilarityConfig};

const CONFIG_DIR: &str = "evalio";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "EVALIO_CONFIG_DIR";

impl EvalConfig {
    /// Load configuration from a file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            EvalError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: EvalConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EvalError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the configuration to use.
    ///
    /// An explicit path must exist; the discovered default location is
    /// optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    fn default_path() -> Option<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }

    /// Check every section, surfacing the first problem
    pub fn validate(&self) -> Result<()> {
        self.similarity_scorer()?;
        self.hybrid_weights()?;
        Ok(())
    }

    pub fn rubric_scorer(&self) -> RubricScorer {
        RubricScorer::new(self.rubric.case_sensitive, self.rubric.partial_match)
    }

    pub fn similarity_scorer(&self) -> Result<SimilarityScorer> {
        let scorer = SimilarityScorer::new(
            self.similarity.ngram_min,
            self.similarity.ngram_max,
            self.similarity.min_df,
        )?;
        Ok(scorer.with_stemming(self.similarity.stemming))
    }

    pub fn hybrid_weights(&self) -> Result<HybridWeights> {
        HybridWeights::new(self.hybrid.rubric_weight, self.hybrid.similarity_weight)
    }

    pub fn hybrid_scorer(&self) -> Result<HybridScorer> {
        Ok(HybridScorer::with_weights(self.hybrid_weights()?))
    }
}
