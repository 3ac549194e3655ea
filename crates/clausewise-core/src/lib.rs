pub mod config;
pub mod error;
pub mod model;
pub mod text;

pub use config::AnalyzerConfig;
pub use error::AnalysisError;
pub use model::{
    AnalysisResult, CategoryGroup, Certainty, Clause, ClauseBreakdown, ClauseCategory,
    DocumentClassification, DocumentType, EntitySet, SimplifiedClause,
};
pub use text::decode_text;
