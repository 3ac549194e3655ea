//! Tunable thresholds for the analysis pipeline.
//!
//! Callers override the defaults through CLI flags, the environment, or a
//! JSON file.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AnalysisError;

/// Thresholds shared by the segmenter, simplifier, and classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzerConfig {
    /// Paragraphs whose trimmed length is at or below this many characters are not clauses.
    pub min_clause_chars: usize,
    /// Sentences longer than this many characters are split at conjunctions.
    pub long_sentence_chars: usize,
    /// Best profile scores below this are reported as `other` with zero confidence.
    pub other_threshold: f64,
}

impl AnalyzerConfig {
    pub const DEFAULT_MIN_CLAUSE_CHARS: usize = 50;
    pub const DEFAULT_LONG_SENTENCE_CHARS: usize = 100;
    pub const DEFAULT_OTHER_THRESHOLD: f64 = 0.1;

    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(?config, "loaded analyzer config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !(0.0..=1.0).contains(&self.other_threshold) {
            return Err(AnalysisError::InvalidConfig(format!(
                "otherThreshold must be within [0, 1], got {}",
                self.other_threshold
            )));
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_clause_chars: Self::DEFAULT_MIN_CLAUSE_CHARS,
            long_sentence_chars: Self::DEFAULT_LONG_SENTENCE_CHARS,
            other_threshold: Self::DEFAULT_OTHER_THRESHOLD,
        }
    }
}
