//! Analysis result types shared between the analysis engine and its callers.
//!
//! Everything here serialises to camelCase JSON; enum values serialise as
//! snake_case labels (`intellectual_property`, `employment_contract`).

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Document types ──

/// Kind of legal document, as decided by keyword-profile scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Nda,
    EmploymentContract,
    ServiceAgreement,
    LeaseAgreement,
    PurchaseAgreement,
    LicenseAgreement,
    PartnershipAgreement,
    LoanAgreement,
    MergerAgreement,
    SettlementAgreement,
    /// No profile scored high enough.
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nda => "nda",
            Self::EmploymentContract => "employment_contract",
            Self::ServiceAgreement => "service_agreement",
            Self::LeaseAgreement => "lease_agreement",
            Self::PurchaseAgreement => "purchase_agreement",
            Self::LicenseAgreement => "license_agreement",
            Self::PartnershipAgreement => "partnership_agreement",
            Self::LoanAgreement => "loan_agreement",
            Self::MergerAgreement => "merger_agreement",
            Self::SettlementAgreement => "settlement_agreement",
            Self::Other => "other",
        }
    }

    /// Review checklist for this kind of document.
    ///
    /// Only NDAs, employment contracts, service agreements, and leases have a
    /// dedicated list; every other type gets the general one.
    pub fn suggested_actions(&self) -> &'static [&'static str] {
        match self {
            Self::Nda => &[
                "Review confidentiality scope and duration",
                "Check permitted disclosures and exceptions",
                "Verify return/destruction of confidential information clauses",
            ],
            Self::EmploymentContract => &[
                "Review compensation and benefits details",
                "Check termination clauses and notice periods",
                "Verify non-compete and intellectual property assignments",
            ],
            Self::ServiceAgreement => &[
                "Review scope of work and deliverables",
                "Check payment terms and schedule",
                "Verify liability limitations and indemnification",
            ],
            Self::LeaseAgreement => &[
                "Review rent amount and escalation clauses",
                "Check maintenance and repair responsibilities",
                "Verify termination and renewal options",
            ],
            _ => &[
                "Review all key terms and conditions",
                "Check liability and indemnification clauses",
                "Verify governing law and dispute resolution",
            ],
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Coarse bucket for a classification confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Certainty {
    High,
    Medium,
    Low,
}

impl Certainty {
    /// `high` above 0.5, `medium` above 0.2, otherwise `low`. Bounds are exclusive.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.5 {
            Self::High
        } else if confidence > 0.2 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Document type plus the normalised keyword score that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentClassification {
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// In `[0, 1]`. Always `0.0` when `doc_type` is `Other`.
    pub confidence: f64,
}

impl DocumentClassification {
    pub fn other() -> Self {
        Self {
            doc_type: DocumentType::Other,
            confidence: 0.0,
        }
    }

    pub fn certainty(&self) -> Certainty {
        Certainty::from_confidence(self.confidence)
    }

    pub fn suggested_actions(&self) -> &'static [&'static str] {
        self.doc_type.suggested_actions()
    }
}

// ── Clauses ──

/// Topic of a clause. `General` when no category keyword matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseCategory {
    Definitions,
    Payment,
    Termination,
    Confidentiality,
    Liability,
    Warranty,
    IntellectualProperty,
    GoverningLaw,
    ForceMajeure,
    Amendment,
    General,
}

impl ClauseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Definitions => "definitions",
            Self::Payment => "payment",
            Self::Termination => "termination",
            Self::Confidentiality => "confidentiality",
            Self::Liability => "liability",
            Self::Warranty => "warranty",
            Self::IntellectualProperty => "intellectual_property",
            Self::GoverningLaw => "governing_law",
            Self::ForceMajeure => "force_majeure",
            Self::Amendment => "amendment",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ClauseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One paragraph-level clause of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clause {
    /// 1-based position among the clauses of the document.
    pub id: usize,
    /// 1-based position among all blank-line separated paragraphs, short ones included.
    pub paragraph: usize,
    /// Paragraph text, trimmed.
    pub text: String,
    pub category: ClauseCategory,
    pub simplified_text: String,
    /// Entities found in `text` alone.
    pub entities: EntitySet,
}

/// Original/simplified pair for one clause, as shown to a reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedClause {
    pub original: String,
    pub simplified: String,
    pub category: ClauseCategory,
    pub entities: EntitySet,
}

impl From<&Clause> for SimplifiedClause {
    fn from(clause: &Clause) -> Self {
        Self {
            original: clause.text.clone(),
            simplified: clause.simplified_text.clone(),
            category: clause.category,
            entities: clause.entities.clone(),
        }
    }
}

// ── Entities ──

/// Entity strings per category, in match order, duplicates kept.
///
/// `parties` and `locations` are part of the schema but no extraction rule
/// fills them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySet {
    pub parties: Vec<String>,
    pub dates: Vec<String>,
    pub monetary_values: Vec<String>,
    pub obligations: Vec<String>,
    pub legal_terms: Vec<String>,
    pub locations: Vec<String>,
    pub organizations: Vec<String>,
}

impl EntitySet {
    /// Category keys in their fixed order.
    pub const CATEGORIES: [&'static str; 7] = [
        "parties",
        "dates",
        "monetaryValues",
        "obligations",
        "legalTerms",
        "locations",
        "organizations",
    ];

    /// Iterate `(category, values)` in [`Self::CATEGORIES`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        let values: [&[String]; 7] = [
            &self.parties,
            &self.dates,
            &self.monetary_values,
            &self.obligations,
            &self.legal_terms,
            &self.locations,
            &self.organizations,
        ];
        Self::CATEGORIES.into_iter().zip(values)
    }

    /// Number of entity strings across all categories.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, values)| values.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

// ── Aggregates ──

/// Everything known about one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Caller-supplied, not interpreted.
    pub filename: String,
    pub classification: DocumentClassification,
    pub clauses: Vec<Clause>,
    /// Entities over the whole document, computed independently of the clauses.
    pub entities: EntitySet,
    pub simplified_clauses: Vec<SimplifiedClause>,
}

/// Clauses of one category, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub category: ClauseCategory,
    pub count: usize,
    pub clauses: Vec<Clause>,
}

/// Clauses grouped by category, groups ordered by first appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseBreakdown {
    pub total_clauses: usize,
    pub categories: Vec<CategoryGroup>,
}

impl ClauseBreakdown {
    pub fn from_clauses(clauses: Vec<Clause>) -> Self {
        let total_clauses = clauses.len();
        let mut categories: Vec<CategoryGroup> = Vec::new();

        for clause in clauses {
            match categories.iter_mut().find(|g| g.category == clause.category) {
                Some(group) => {
                    group.count += 1;
                    group.clauses.push(clause);
                }
                None => categories.push(CategoryGroup {
                    category: clause.category,
                    count: 1,
                    clauses: vec![clause],
                }),
            }
        }

        Self {
            total_clauses,
            categories,
        }
    }

    pub fn count(&self, category: ClauseCategory) -> usize {
        self.categories
            .iter()
            .find(|g| g.category == category)
            .map_or(0, |g| g.count)
    }
}
