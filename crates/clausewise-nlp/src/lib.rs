//! Rule-based legal text analysis: document classification, clause
//! segmentation, entity extraction and plain-language simplification.
//!
//! Every component is deterministic and pattern driven. The free functions
//! below run a component with the default [`AnalyzerConfig`]; use
//! [`Analyzer`] to tune thresholds or to analyze whole documents.
//!
//! [`AnalyzerConfig`]: clausewise_core::AnalyzerConfig

pub mod analyzer;
pub mod classifier;
pub mod entities;
pub mod segmenter;
pub mod simplifier;

pub use analyzer::Analyzer;
pub use classifier::DocumentClassifier;
pub use segmenter::ClauseSegmenter;
pub use simplifier::Simplifier;

use clausewise_core::{Clause, DocumentClassification, EntitySet};

/// Classify a document against the built-in keyword profiles.
pub fn classify_document(text: &str) -> DocumentClassification {
    DocumentClassifier::default().classify(text)
}

/// Extract dates, amounts, obligations, legal terms and organizations.
pub fn extract_entities(text: &str) -> EntitySet {
    entities::extract(text)
}

pub fn segment_clauses(text: &str) -> Vec<Clause> {
    ClauseSegmenter::default().segment(text)
}

pub fn simplify(text: &str) -> String {
    Simplifier::default().simplify(text)
}
