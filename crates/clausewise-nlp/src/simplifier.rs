//! Plain-language rewriting of legal text.
//!
//! Two passes: legal phrases are replaced with everyday equivalents, then
//! over-long sentences are broken at coordinating conjunctions.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::debug;

use clausewise_core::AnalyzerConfig;

/// A legal phrase and its plain replacement.
struct SimplificationRule {
    pattern: Regex,
    plain: &'static str,
}

/// Applied in this order, each over the output of the previous one.
const PHRASES: &[(&str, &str)] = &[
    ("heretofore", "before this"),
    ("hereinafter", "after this"),
    ("whereas", "since"),
    ("therefore", "so"),
    ("notwithstanding", "despite"),
    ("forthwith", "immediately"),
    ("pursuant to", "according to"),
    ("in consideration of", "in exchange for"),
    ("shall", "must"),
    ("may", "can"),
    ("indemnify", "protect from losses"),
    ("holdco", "holding company"),
    ("force majeure", "unforeseeable circumstances"),
    ("quid pro quo", "something for something"),
    ("per annum", "per year"),
    ("per se", "by itself"),
    ("pro rata", "proportionally"),
    ("ad hoc", "for this specific purpose"),
    ("bona fide", "genuine"),
    ("in perpetuity", "forever"),
    ("null and void", "invalid"),
    ("party of the first part", "first party"),
    ("party of the second part", "second party"),
];

static SIMPLIFICATION_RULES: LazyLock<Vec<SimplificationRule>> = LazyLock::new(|| {
    PHRASES
        .iter()
        .map(|&(legal, plain)| SimplificationRule {
            pattern: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(legal)))
                .expect("invalid simplification pattern"),
            plain,
        })
        .collect()
});

static CONJUNCTION_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i),\s*(?:and|or|but|however|moreover|furthermore)\s+")
        .expect("invalid conjunction pattern")
});

/// Rewrites legalese into shorter, plainer sentences.
#[derive(Debug, Clone)]
pub struct Simplifier {
    long_sentence_chars: usize,
}

impl Default for Simplifier {
    fn default() -> Self {
        Self {
            long_sentence_chars: AnalyzerConfig::DEFAULT_LONG_SENTENCE_CHARS,
        }
    }
}

impl Simplifier {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            long_sentence_chars: config.long_sentence_chars,
        }
    }

    /// Simplify `text`.
    ///
    /// Sentences are cut on every `.` and rejoined with `". "`. A trailing
    /// `.` is added only when the substituted text did not already end with
    /// one, so `simplify("")` is `"."`.
    pub fn simplify(&self, text: &str) -> String {
        let substituted = substitute_phrases(text);

        let mut fragments: Vec<&str> = Vec::new();
        for sentence in substituted.split('.') {
            let trimmed = sentence.trim();
            if trimmed.chars().count() > self.long_sentence_chars {
                fragments.extend(
                    CONJUNCTION_SPLIT
                        .split(sentence)
                        .map(str::trim)
                        .filter(|part| !part.is_empty()),
                );
            } else if !trimmed.is_empty() {
                fragments.push(trimmed);
            }
        }

        let mut simplified = fragments.join(". ");
        if !substituted.ends_with('.') {
            simplified.push('.');
        }

        debug!(
            input_len = text.len(),
            fragments = fragments.len(),
            "simplified text"
        );
        simplified
    }
}

/// Replace every legal phrase, case-insensitively, with its plain form.
fn substitute_phrases(text: &str) -> String {
    let mut out = text.to_string();
    for rule in SIMPLIFICATION_RULES.iter() {
        let replaced = rule.pattern.replace_all(&out, NoExpand(rule.plain));
        if let Cow::Owned(replaced) = replaced {
            out = replaced;
        }
    }
    out
}
