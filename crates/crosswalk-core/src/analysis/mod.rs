//! Quality analysis: score aggregation and the analyzer service.

pub mod analyzer;
pub mod scoring;

pub use analyzer::QualityAnalyzer;
pub use scoring::{
    ALGORITHM_VERSION, REVIEW_CONFIDENCE_THRESHOLD, combined_percentage, confidence_score,
    population_variance, quality_score, round_score, round_similarity,
};
