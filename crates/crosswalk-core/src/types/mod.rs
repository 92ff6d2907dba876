//! Shared data types of the analysis engine.

pub mod analysis;
pub mod gap;
pub mod mapping;
pub mod requirement;

pub use analysis::{AnalysisResult, ExtractedKeywords};
pub use gap::{GapItem, GapStatus, GapType, IdentificationSource};
pub use mapping::{MappingState, VerificationState};
pub use requirement::{Priority, Requirement, RequirementMeta, RequirementText};
