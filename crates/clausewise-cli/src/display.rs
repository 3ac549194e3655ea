//! Vertical card display for analysis results.
//!
//! Every renderer returns the card as a `String`; `main` prints it. Sections
//! with nothing to show are left out.

use std::fmt::Write;

use clausewise_core::{
    AnalysisResult, Clause, ClauseBreakdown, DocumentClassification, EntitySet,
};

const MAX_LIST_ITEMS: usize = 10;
const MAX_TEXT_CHARS: usize = 72;

// ── Public API ──

/// Full card for one analyzed document.
pub fn analysis_card(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", result.filename);
    let _ = writeln!(out);

    out.push_str(&classification_section(&result.classification));
    out.push_str(&clause_section(&result.clauses));
    out.push_str(&entity_section(&result.entities));
    out
}

pub fn classification_card(classification: &DocumentClassification) -> String {
    classification_section(classification)
}

pub fn entity_card(entities: &EntitySet) -> String {
    if entities.is_empty() {
        return "No entities found.\n".to_string();
    }
    entity_section(entities)
}

/// Clauses grouped by category, in order of first appearance.
pub fn breakdown_card(breakdown: &ClauseBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Clauses ({})", breakdown.total_clauses);
    if breakdown.total_clauses == 0 {
        return out;
    }

    for group in &breakdown.categories {
        let _ = writeln!(out, "  {:<26} {}", group.category, group.count);
        for clause in &group.clauses {
            let _ = writeln!(out, "    #{:<4} {}", clause.id, truncate(&clause.text));
        }
    }
    let _ = writeln!(out);
    out
}

// ── Section rendering ──

fn classification_section(classification: &DocumentClassification) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Classification");
    let _ = writeln!(out, "  {:<26} {}", "type", classification.doc_type);
    let _ = writeln!(
        out,
        "  {:<26} {:.2} ({})",
        "confidence",
        classification.confidence,
        classification.certainty().as_str()
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Suggested Actions");
    for action in classification.suggested_actions() {
        let _ = writeln!(out, "  - {action}");
    }
    let _ = writeln!(out);
    out
}

fn clause_section(clauses: &[Clause]) -> String {
    let mut out = String::new();
    if clauses.is_empty() {
        return out;
    }

    let _ = writeln!(out, "Clauses ({})", clauses.len());
    for clause in clauses.iter().take(MAX_LIST_ITEMS) {
        let _ = writeln!(
            out,
            "  #{:<4} {:<22} paragraph {}",
            clause.id, clause.category, clause.paragraph
        );
        let _ = writeln!(out, "        {}", truncate(&clause.text));
        if clause.simplified_text != clause.text {
            let _ = writeln!(out, "      > {}", truncate(&clause.simplified_text));
        }
    }
    if clauses.len() > MAX_LIST_ITEMS {
        let _ = writeln!(out, "  ... and {} more", clauses.len() - MAX_LIST_ITEMS);
    }
    let _ = writeln!(out);
    out
}

fn entity_section(entities: &EntitySet) -> String {
    let mut out = String::new();
    if entities.is_empty() {
        return out;
    }

    let _ = writeln!(out, "Entities ({})", entities.total());
    for (category, values) in entities.iter() {
        if values.is_empty() {
            continue;
        }
        let shown: Vec<String> = values
            .iter()
            .take(MAX_LIST_ITEMS)
            .map(|v| truncate(v))
            .collect();
        let _ = writeln!(out, "  {:<26} {}", category, shown.join(", "));
        if values.len() > MAX_LIST_ITEMS {
            let _ = writeln!(out, "  {:<26} ... and {} more", "", values.len() - MAX_LIST_ITEMS);
        }
    }
    let _ = writeln!(out);
    out
}

// ── Helpers ──

/// Collapse whitespace and cut to [`MAX_TEXT_CHARS`] characters.
fn truncate(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= MAX_TEXT_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(MAX_TEXT_CHARS - 3).collect();
    format!("{cut}...")
}
