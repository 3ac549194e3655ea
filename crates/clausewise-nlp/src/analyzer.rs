//! Whole-document analysis: classification, clauses, and document-wide entities.

use tracing::info;

use clausewise_core::{
    AnalysisError, AnalysisResult, AnalyzerConfig, Clause, ClauseBreakdown,
    DocumentClassification, EntitySet, SimplifiedClause, decode_text,
};

use crate::classifier::DocumentClassifier;
use crate::entities;
use crate::segmenter::ClauseSegmenter;
use crate::simplifier::Simplifier;

/// Runs every component over a document and joins the results.
///
/// Holds no per-document state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    simplifier: Simplifier,
    segmenter: ClauseSegmenter,
    classifier: DocumentClassifier,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            simplifier: Simplifier::default(),
            segmenter: ClauseSegmenter::default(),
            classifier: DocumentClassifier::default(),
        }
    }
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self {
            simplifier: Simplifier::new(&config),
            segmenter: ClauseSegmenter::new(&config),
            classifier: DocumentClassifier::new(&config),
            config,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one document. `filename` is carried through untouched.
    pub fn analyze(&self, filename: &str, text: &str) -> AnalysisResult {
        let classification = self.classifier.classify(text);
        let clauses = self.segmenter.segment(text);
        let entities = entities::extract(text);
        let simplified_clauses = clauses.iter().map(SimplifiedClause::from).collect();

        info!(
            filename,
            doc_type = %classification.doc_type,
            confidence = classification.confidence,
            clauses = clauses.len(),
            entities = entities.total(),
            "analyzed document"
        );

        AnalysisResult {
            filename: filename.to_string(),
            classification,
            clauses,
            entities,
            simplified_clauses,
        }
    }

    /// Analyze raw bytes; fails with `InvalidInput` unless they are UTF-8 text.
    pub fn analyze_bytes(
        &self,
        filename: &str,
        bytes: &[u8],
    ) -> Result<AnalysisResult, AnalysisError> {
        let text = decode_text(bytes)?;
        Ok(self.analyze(filename, text))
    }

    /// Clauses of `text` grouped by category.
    pub fn breakdown(&self, text: &str) -> ClauseBreakdown {
        ClauseBreakdown::from_clauses(self.segment(text))
    }

    pub fn classify(&self, text: &str) -> DocumentClassification {
        self.classifier.classify(text)
    }

    pub fn segment(&self, text: &str) -> Vec<Clause> {
        self.segmenter.segment(text)
    }

    pub fn extract(&self, text: &str) -> EntitySet {
        entities::extract(text)
    }

    pub fn simplify(&self, text: &str) -> String {
        self.simplifier.simplify(text)
    }
}
