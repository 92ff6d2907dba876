//! Gap analysis: rules, remediation texts, analyzer service, summaries.

pub mod analyzer;
pub mod remediation;
pub mod rules;
pub mod summary;

pub use analyzer::GapAnalyzer;
pub use remediation::recommended_action;
pub use summary::{
    GapSummary, HIGH_CONFIDENCE_THRESHOLD, MEDIUM_CONFIDENCE_THRESHOLD, summarize,
    total_gap_impact,
};
