//! Keyword-profile classification of whole documents.
//!
//! Each document type has a fixed keyword profile. A document's score for a
//! profile is the fraction of that profile's keywords found in the text, and
//! the best-scoring profile wins. Profiles are an ordered slice so that ties
//! always resolve to the earliest definition.

use tracing::debug;

use clausewise_core::{AnalyzerConfig, DocumentClassification, DocumentType};

/// Keyword profiles in tie-break order.
pub const PROFILES: &[(DocumentType, &[&str])] = &[
    (
        DocumentType::Nda,
        &[
            "non-disclosure",
            "confidentiality",
            "proprietary information",
            "trade secret",
        ],
    ),
    (
        DocumentType::EmploymentContract,
        &[
            "employment",
            "employee",
            "employer",
            "salary",
            "job title",
            "work duties",
        ],
    ),
    (
        DocumentType::ServiceAgreement,
        &[
            "service",
            "services",
            "provider",
            "client",
            "deliverables",
            "scope of work",
        ],
    ),
    (
        DocumentType::LeaseAgreement,
        &["lease", "rent", "tenant", "landlord", "premises", "property"],
    ),
    (
        DocumentType::PurchaseAgreement,
        &["purchase", "sale", "buyer", "seller", "goods", "merchandise"],
    ),
    (
        DocumentType::LicenseAgreement,
        &[
            "license",
            "licensor",
            "licensee",
            "intellectual property",
            "usage rights",
        ],
    ),
    (
        DocumentType::PartnershipAgreement,
        &["partnership", "partner", "joint venture", "profit sharing"],
    ),
    (
        DocumentType::LoanAgreement,
        &[
            "loan",
            "borrower",
            "lender",
            "interest",
            "repayment",
            "principal",
        ],
    ),
    (
        DocumentType::MergerAgreement,
        &["merger", "acquisition", "consolidation", "shareholders"],
    ),
    (
        DocumentType::SettlementAgreement,
        &["settlement", "dispute", "resolution", "claims", "release"],
    ),
];

/// Keyword-profile document classifier.
#[derive(Debug, Clone)]
pub struct DocumentClassifier {
    other_threshold: f64,
}

impl Default for DocumentClassifier {
    fn default() -> Self {
        Self {
            other_threshold: AnalyzerConfig::DEFAULT_OTHER_THRESHOLD,
        }
    }
}

impl DocumentClassifier {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            other_threshold: config.other_threshold,
        }
    }

    /// Classify a document.
    ///
    /// When the best score is below the threshold the result is
    /// [`DocumentType::Other`] with confidence forced to `0.0`.
    pub fn classify(&self, text: &str) -> DocumentClassification {
        let scores = profile_scores(text);
        let (doc_type, confidence) = best_match(&scores);

        if confidence < self.other_threshold {
            debug!(best = %doc_type, confidence, "no profile above threshold");
            return DocumentClassification::other();
        }

        debug!(doc_type = %doc_type, confidence, "classified document");
        DocumentClassification {
            doc_type,
            confidence,
        }
    }
}

/// Normalised score for every profile, in [`PROFILES`] order.
///
/// A keyword counts once if it occurs anywhere in the lowercased text, as a
/// plain substring.
pub fn profile_scores(text: &str) -> Vec<(DocumentType, f64)> {
    let lower = text.to_lowercase();
    PROFILES
        .iter()
        .map(|&(doc_type, keywords)| {
            let hits = keywords.iter().filter(|kw| lower.contains(*kw)).count();
            (doc_type, hits as f64 / keywords.len() as f64)
        })
        .collect()
}

/// Highest score; the first of equal maxima wins.
fn best_match(scores: &[(DocumentType, f64)]) -> (DocumentType, f64) {
    let mut best_type = DocumentType::Other;
    let mut best_score = f64::NEG_INFINITY;

    for &(doc_type, score) in scores {
        if score > best_score {
            best_score = score;
            best_type = doc_type;
        }
    }

    (best_type, best_score)
}
