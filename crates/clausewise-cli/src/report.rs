//! JSON envelopes printed by `--json`.

use chrono::Utc;
use serde::Serialize;

use clausewise_core::{
    AnalysisResult, Certainty, ClauseBreakdown, DocumentClassification, EntitySet,
};

/// Every JSON report carries when and by which build it was produced.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<T> {
    pub generated_at: String,
    pub version: &'static str,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Report<T> {
    pub fn new(body: T) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
            body,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeBody {
    pub total_files: usize,
    pub total_clauses: usize,
    pub documents: Vec<AnalysisResult>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyBody {
    pub filename: String,
    pub classification: DocumentClassification,
    pub certainty: Certainty,
    pub suggested_actions: &'static [&'static str],
}

impl ClassifyBody {
    pub fn new(filename: String, classification: DocumentClassification) -> Self {
        Self {
            filename,
            certainty: classification.certainty(),
            suggested_actions: classification.suggested_actions(),
            classification,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitiesBody {
    pub filename: String,
    pub entities: EntitySet,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClausesBody {
    pub filename: String,
    #[serde(flatten)]
    pub breakdown: ClauseBreakdown,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifyBody {
    pub original: String,
    pub simplified: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausewise_core::DocumentType;

    #[test]
    fn envelope_is_flattened_with_timestamp() {
        let report = Report::new(SimplifyBody {
            original: "You may go".to_string(),
            simplified: "You can go.".to_string(),
        });
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["simplified"], "You can go.");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        let stamp = json["generatedAt"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok(), "{stamp}");
    }

    #[test]
    fn classify_body_adds_certainty_and_actions() {
        let body = ClassifyBody::new(
            "lease.txt".to_string(),
            DocumentClassification {
                doc_type: DocumentType::LeaseAgreement,
                confidence: 0.3,
            },
        );
        let json = serde_json::to_value(Report::new(body)).unwrap();
        assert_eq!(json["classification"]["type"], "lease_agreement");
        assert_eq!(json["certainty"], "medium");
        assert_eq!(
            json["suggestedActions"][0],
            "Review rent amount and escalation clauses"
        );
    }

    #[test]
    fn clauses_body_inlines_breakdown() {
        let body = ClausesBody {
            filename: "empty.txt".to_string(),
            breakdown: ClauseBreakdown::from_clauses(Vec::new()),
        };
        let json = serde_json::to_value(Report::new(body)).unwrap();
        assert_eq!(json["totalClauses"], 0);
        assert!(json["categories"].as_array().unwrap().is_empty());
    }
}
