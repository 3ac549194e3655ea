//! Paragraph-level clause segmentation and categorisation.
//!
//! Clauses are blank-line separated paragraphs. Numbered or lettered clause
//! markers are not used as boundaries.

use tracing::debug;

use clausewise_core::{AnalyzerConfig, Clause, ClauseCategory};

use crate::entities;
use crate::simplifier::Simplifier;

/// Category keywords, checked in this order. The first category with any
/// keyword occurring as a case-insensitive substring wins.
pub const CATEGORY_KEYWORDS: &[(ClauseCategory, &[&str])] = &[
    (
        ClauseCategory::Definitions,
        &["definition", "means", "shall mean", "defined as"],
    ),
    (
        ClauseCategory::Payment,
        &["payment", "fee", "compensation", "salary", "remuneration", "cost"],
    ),
    (
        ClauseCategory::Termination,
        &["terminate", "termination", "end", "expiry", "expire"],
    ),
    (
        ClauseCategory::Confidentiality,
        &["confidential", "non-disclosure", "proprietary", "secret"],
    ),
    (
        ClauseCategory::Liability,
        &["liability", "liable", "damages", "loss", "harm", "responsible"],
    ),
    (
        ClauseCategory::Warranty,
        &["warranty", "warrant", "guarantee", "represent", "representation"],
    ),
    (
        ClauseCategory::IntellectualProperty,
        &["intellectual property", "copyright", "trademark", "patent"],
    ),
    (
        ClauseCategory::GoverningLaw,
        &["governing law", "jurisdiction", "court", "applicable law"],
    ),
    (
        ClauseCategory::ForceMajeure,
        &["force majeure", "act of god", "unforeseeable", "beyond control"],
    ),
    (
        ClauseCategory::Amendment,
        &["amendment", "modify", "change", "alter", "update"],
    ),
];

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// First-match category of a paragraph; `General` when nothing matches.
pub fn categorize(paragraph: &str) -> ClauseCategory {
    let lower = paragraph.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map_or(ClauseCategory::General, |&(category, _)| category)
}

/// Splits a document into categorised, simplified, entity-annotated clauses.
#[derive(Debug, Clone)]
pub struct ClauseSegmenter {
    min_clause_chars: usize,
    simplifier: Simplifier,
}

impl Default for ClauseSegmenter {
    fn default() -> Self {
        Self {
            min_clause_chars: AnalyzerConfig::DEFAULT_MIN_CLAUSE_CHARS,
            simplifier: Simplifier::default(),
        }
    }
}

impl ClauseSegmenter {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            min_clause_chars: config.min_clause_chars,
            simplifier: Simplifier::new(config),
        }
    }

    /// Segment `text` into clauses, in document order.
    ///
    /// Paragraphs whose trimmed length is at or below the minimum are skipped
    /// and do not consume a clause id.
    pub fn segment(&self, text: &str) -> Vec<Clause> {
        let mut clauses = Vec::new();
        let mut skipped = 0usize;

        for (index, paragraph) in text.split(PARAGRAPH_SEPARATOR).enumerate() {
            let trimmed = paragraph.trim();
            if trimmed.chars().count() <= self.min_clause_chars {
                skipped += 1;
                continue;
            }

            clauses.push(Clause {
                id: clauses.len() + 1,
                paragraph: index + 1,
                text: trimmed.to_string(),
                category: categorize(trimmed),
                simplified_text: self.simplifier.simplify(trimmed),
                entities: entities::extract(trimmed),
            });
        }

        debug!(clauses = clauses.len(), skipped, "segmented document");
        clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: &str = "Section 1. Term of agreement.";
    const TERMINATION: &str = "Either party may terminate this arrangement by giving the other \
                               party ninety days written notice delivered by hand or by \
                               registered post to the address stated above in this arrangement.";

    fn segment(text: &str) -> Vec<Clause> {
        ClauseSegmenter::default().segment(text)
    }

    #[test]
    fn short_paragraph_is_dropped() {
        let doc = format!("{SHORT}\n\n{TERMINATION}");
        let clauses = segment(&doc);

        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].id, 1);
        assert_eq!(clauses[0].paragraph, 2);
        assert_eq!(clauses[0].category, ClauseCategory::Termination);
        assert_eq!(clauses[0].text, TERMINATION);
    }

    #[test]
    fn boundary_length_is_exclusive() {
        let exactly_fifty = "a".repeat(50);
        let fifty_one = "b".repeat(51);
        let clauses = segment(&format!("{exactly_fifty}\n\n{fifty_one}"));
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].text, fifty_one);
    }

    #[test]
    fn length_is_measured_after_trimming() {
        let padded = format!("   {}   ", "c".repeat(45));
        assert!(segment(&padded).is_empty());
    }

    #[test]
    fn ids_increase_in_document_order() {
        let doc = format!("{TERMINATION}\n\n{SHORT}\n\n{TERMINATION}\n\n{TERMINATION}");
        let clauses = segment(&doc);
        let ids: Vec<usize> = clauses.iter().map(|c| c.id).collect();
        let paragraphs: Vec<usize> = clauses.iter().map(|c| c.paragraph).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(paragraphs, vec![1, 3, 4]);
    }

    #[test]
    fn single_newlines_do_not_split() {
        let doc = format!("{TERMINATION}\n{TERMINATION}");
        assert_eq!(segment(&doc).len(), 1);
    }

    #[test]
    fn clause_carries_simplified_text_and_local_entities() {
        let text = "The Licensee shall pay Acme Inc a fee of $1,500.00 on 1/15/2025 \
                    for each seat.";
        let clauses = segment(&format!("{text}\n\nShort tail."));

        assert_eq!(clauses.len(), 1);
        let clause = &clauses[0];
        assert_eq!(clause.category, ClauseCategory::Payment);
        assert!(clause.simplified_text.contains("The Licensee must pay Acme Inc"));
        assert_eq!(clause.entities.monetary_values, vec!["$1,500.00"]);
        assert_eq!(clause.entities.dates, vec!["1/15/2025"]);
        assert_eq!(clause.entities.organizations, vec!["Acme Inc"]);
    }

    #[test]
    fn empty_document_has_no_clauses() {
        assert!(segment("").is_empty());
        assert!(segment("\n\n\n\n").is_empty());
    }

    #[test]
    fn categorize_takes_first_listed_category() {
        // Payment is listed before termination.
        assert_eq!(
            categorize("Payment is due before the parties terminate"),
            ClauseCategory::Payment
        );
    }

    #[test]
    fn categorize_matches_substrings() {
        // "coffee" contains "fee".
        assert_eq!(
            categorize("The coffee machine stays in the kitchen"),
            ClauseCategory::Payment
        );
        // "CONFIDENTIAL" ignores case.
        assert_eq!(
            categorize("ALL INFORMATION IS CONFIDENTIAL"),
            ClauseCategory::Confidentiality
        );
    }

    #[test]
    fn categorize_falls_back_to_general() {
        assert_eq!(
            categorize("The parties sign in two counterparts"),
            ClauseCategory::General
        );
    }

    #[test]
    fn every_category_is_reachable() {
        let samples = [
            ("\"Software\" is defined as the licensed code", ClauseCategory::Definitions),
            ("The monthly salary", ClauseCategory::Payment),
            ("Upon expiry", ClauseCategory::Termination),
            ("Proprietary data", ClauseCategory::Confidentiality),
            ("Neither party is liable", ClauseCategory::Liability),
            ("The seller warrants title", ClauseCategory::Warranty),
            ("Each patent", ClauseCategory::IntellectualProperty),
            ("Any court of competent jurisdiction", ClauseCategory::GoverningLaw),
            ("An act of God", ClauseCategory::ForceMajeure),
            ("Either side may modify the schedule", ClauseCategory::Amendment),
        ];
        for (text, expected) in samples {
            assert_eq!(categorize(text), expected, "{text}");
        }
    }

    #[test]
    fn earlier_category_shadows_via_substring() {
        // "amendment" contains "end", and termination is listed first.
        assert_eq!(
            categorize("No amendment is valid unless signed"),
            ClauseCategory::Termination
        );
    }

    #[test]
    fn min_length_comes_from_config() {
        let config = AnalyzerConfig {
            min_clause_chars: 10,
            ..Default::default()
        };
        let clauses = ClauseSegmenter::new(&config).segment(SHORT);
        assert_eq!(clauses.len(), 1);
    }
}
