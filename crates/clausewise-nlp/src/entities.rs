//! Rule-based entity extraction for legal text.
//!
//! Every category is the concatenation of the match lists of its patterns,
//! pattern by pattern. Matches are never deduplicated, so overlapping
//! patterns can report the same span twice.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use clausewise_core::EntitySet;

const MONTHS: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";

/// Vocabulary for `legalTerms`, in output order.
pub const LEGAL_TERMS: &[&str] = &[
    "contract",
    "agreement",
    "clause",
    "provision",
    "warranty",
    "indemnification",
    "liability",
    "damages",
    "breach",
    "termination",
    "confidentiality",
    "non-disclosure",
    "intellectual property",
    "copyright",
    "trademark",
    "patent",
    "trade secret",
    "force majeure",
    "arbitration",
    "jurisdiction",
    "governing law",
    "amendment",
];

fn compile(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("invalid entity pattern"))
        .collect()
}

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b".to_string(),
        format!(r"(?i)\b\d{{1,2}}\s+(?:{MONTHS})\s+\d{{2,4}}\b"),
        format!(r"(?i)\b(?:{MONTHS})\s+\d{{1,2}},?\s+\d{{2,4}}\b"),
    ])
});

static MONEY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\$[\d,]+(?:\.\d{2})?".to_string(),
        r"(?i)\b\d+\s*(?:dollars?|USD|cents?)\b".to_string(),
        r"(?i)\b(?:USD|EUR|GBP|CAD)\s*[\d,]+(?:\.\d{2})?\b".to_string(),
    ])
});

/// Corporate names are matched case-sensitively: the capitalisation is the signal.
static ORGANIZATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:Inc|LLC|Corp|Corporation|Company|Ltd|Limited)\b"
            .to_string(),
        r"\b(?:Inc|LLC|Corp|Corporation|Company|Ltd|Limited)\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b"
            .to_string(),
    ])
});

/// Each obligation runs from its trigger phrase up to the next period.
static OBLIGATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)\b(?:shall|must|will|agree to|undertake to|covenant to)\s+[^.]+".to_string(),
        r"(?i)\b(?:responsible for|liable for|obligated to)\s+[^.]+".to_string(),
        r"(?i)\bparty\s+\w+\s+(?:shall|must|will)\s+[^.]+".to_string(),
    ])
});

static LEGAL_TERM_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    LEGAL_TERMS
        .iter()
        .map(|&term| {
            let regex = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
                .expect("invalid legal term pattern");
            (term, regex)
        })
        .collect()
});

/// Extract every entity category from `text`.
///
/// `parties` and `locations` are always empty: no rule populates them.
pub fn extract(text: &str) -> EntitySet {
    let entities = EntitySet {
        parties: Vec::new(),
        dates: find_all(&DATE_PATTERNS, text),
        monetary_values: find_all(&MONEY_PATTERNS, text),
        obligations: find_all(&OBLIGATION_PATTERNS, text),
        legal_terms: legal_terms(text),
        locations: Vec::new(),
        organizations: find_all(&ORGANIZATION_PATTERNS, text),
    };

    debug!(
        dates = entities.dates.len(),
        monetary_values = entities.monetary_values.len(),
        obligations = entities.obligations.len(),
        legal_terms = entities.legal_terms.len(),
        organizations = entities.organizations.len(),
        "extracted entities"
    );
    entities
}

/// All non-overlapping matches of each pattern, concatenated in pattern order.
fn find_all(patterns: &[Regex], text: &str) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|p| p.find_iter(text).map(|m| m.as_str().to_string()))
        .collect()
}

/// Vocabulary terms present as whole words, once each, in vocabulary order.
fn legal_terms(text: &str) -> Vec<String> {
    LEGAL_TERM_PATTERNS
        .iter()
        .filter(|(_, regex)| regex.is_match(text))
        .map(|(term, _)| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NDA_SENTENCE: &str = "This Agreement is a Non-Disclosure Agreement between Acme Inc and \
                                Beta LLC, dated January 5, 2024, for $5,000.00 per annum.";

    #[test]
    fn two_party_agreement_sentence() {
        let e = extract(NDA_SENTENCE);
        assert_eq!(e.dates, vec!["January 5, 2024"]);
        assert_eq!(e.monetary_values, vec!["$5,000.00"]);
        assert_eq!(e.legal_terms, vec!["agreement", "non-disclosure"]);
        assert_eq!(e.organizations, vec!["Acme Inc", "Beta LLC"]);
        assert!(e.obligations.is_empty());
    }

    #[test]
    fn parties_and_locations_are_never_filled() {
        for text in [
            "",
            NDA_SENTENCE,
            "Party A shall pay Party B in London, England on 1/2/2025.",
        ] {
            let e = extract(text);
            assert!(e.parties.is_empty());
            assert!(e.locations.is_empty());
        }
    }

    #[test]
    fn empty_text_yields_empty_set() {
        assert_eq!(extract(""), EntitySet::default());
    }

    #[test]
    fn numeric_dates() {
        let e = extract("Signed on 12/31/2023 and effective 1-1-24.");
        assert_eq!(e.dates, vec!["12/31/2023", "1-1-24"]);
    }

    #[test]
    fn dates_follow_pattern_order_not_document_order() {
        let e = extract("On March 3, 2024 and again on 4 April 2024");
        assert_eq!(e.dates, vec!["4 April 2024", "March 3, 2024"]);
    }

    #[test]
    fn month_names_ignore_case() {
        let e = extract("effective january 5, 2024");
        assert_eq!(e.dates, vec!["january 5, 2024"]);
    }

    #[test]
    fn monetary_forms() {
        let e = extract("a fee of 500 dollars and USD 1,200.50 plus $99");
        assert_eq!(e.monetary_values, vec!["$99", "500 dollars", "USD 1,200.50"]);
    }

    #[test]
    fn overlapping_money_patterns_both_report() {
        let e = extract("USD 100 dollars");
        assert_eq!(e.monetary_values, vec!["100 dollars", "USD 100"]);
    }

    #[test]
    fn legal_terms_in_vocabulary_order_once_each() {
        let e = extract(
            "Breach of contract leads to arbitration under the governing law. \
             Any breach of this contract is a breach.",
        );
        assert_eq!(
            e.legal_terms,
            vec!["contract", "breach", "arbitration", "governing law"]
        );
    }

    #[test]
    fn legal_terms_need_whole_words() {
        let e = extract("The contractor signed several agreements.");
        assert!(e.legal_terms.is_empty(), "{:?}", e.legal_terms);
    }

    #[test]
    fn organization_suffix_after_name() {
        let e = extract("Supplied by Globex Corporation and Initech Ltd.");
        assert_eq!(e.organizations, vec!["Globex Corporation", "Initech Ltd"]);
    }

    #[test]
    fn organization_suffix_before_name() {
        let e = extract("payments to Ltd Widgets are due");
        assert_eq!(e.organizations, vec!["Ltd Widgets"]);
    }

    #[test]
    fn organizations_are_case_sensitive() {
        let e = extract("acme inc and beta llc");
        assert!(e.organizations.is_empty());
    }

    #[test]
    fn obligations_run_to_next_period() {
        let e = extract("The Tenant shall pay rent monthly. The Landlord must repair the roof.");
        assert_eq!(
            e.obligations,
            vec!["shall pay rent monthly", "must repair the roof"]
        );
    }

    #[test]
    fn party_obligations_are_reported_again() {
        let e = extract("Party A shall deliver the goods.");
        assert_eq!(
            e.obligations,
            vec!["shall deliver the goods", "Party A shall deliver the goods"]
        );
    }

    #[test]
    fn responsibility_phrases() {
        let e = extract("The buyer is responsible for shipping costs.");
        assert_eq!(e.obligations, vec!["responsible for shipping costs"]);
    }

    #[test]
    fn obligation_span_crosses_newlines() {
        let e = extract("The Supplier will\nprovide support");
        assert_eq!(e.obligations, vec!["will\nprovide support"]);
    }

    #[test]
    fn extraction_is_deterministic() {
        assert_eq!(extract(NDA_SENTENCE), extract(NDA_SENTENCE));
    }
}
