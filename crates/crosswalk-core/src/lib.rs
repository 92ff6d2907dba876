//! Crosswalk Core Library
//!
//! Scoring and gap-analysis engine for compliance-framework crosswalks.
//! Given the text and metadata of two requirements from different
//! frameworks, the engine scores how well the source requirement covers the
//! target requirement and derives the concrete gaps that keep the mapping
//! from being complete.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`Requirement`, `MappingState`, `AnalysisResult`, `GapItem`)
//! - Text processing (normalization, tokenization, the keyword dictionary)
//! - Similarity metrics (textual and structural)
//! - Score aggregation and the [`QualityAnalyzer`] service
//! - The gap rule engine, remediation texts, and gap summaries
//!
//! Everything is synchronous and deterministic: analyzing the same pair of
//! requirements twice produces identical results.
//!
//! # Example
//!
//! ```
//! use crosswalk_core::analysis::QualityAnalyzer;
//! use crosswalk_core::types::{MappingState, Requirement, RequirementMeta};
//!
//! let analyzer = QualityAnalyzer::new();
//! let source = Requirement::new("Encryption of backups.", RequirementMeta::new("ISO27001"));
//! let target = Requirement::new("Encryption of backups.", RequirementMeta::new("ISO27002"));
//!
//! let result = analyzer.analyze(&source, &target, &MappingState::default());
//! // Identical texts, plus the ISO framework-family bonus.
//! assert_eq!(result.calculated_percentage, 93);
//! assert_eq!(result.textual_similarity, 1.0);
//! assert!(!result.requires_review);
//! ```

pub mod analysis;
pub mod error;
pub mod gaps;
pub mod similarity;
pub mod text;
pub mod types;

// Re-exports for convenience
pub use analysis::QualityAnalyzer;
pub use error::ParseError;
pub use gaps::{GapAnalyzer, GapSummary, summarize};
pub use types::{
    AnalysisResult, ExtractedKeywords, GapItem, GapStatus, GapType, MappingState, Priority,
    Requirement, RequirementMeta, VerificationState,
};
