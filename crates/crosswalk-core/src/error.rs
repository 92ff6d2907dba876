//! Error types for crosswalk-core.
//!
//! The analysis pipeline itself is total: every degenerate input (empty
//! text, missing metadata, zero-magnitude vectors) maps to a documented
//! fallback value, never to an error. The only fallible surface is parsing
//! the lowercase wire strings the surrounding system stores for the domain
//! enums, covered by [`ParseError`].
//!
//! Never panic in library code; return `Result`.

use thiserror::Error;

/// Failure to parse a stored string into one of the domain enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Value did not name a priority level.
    #[error("Invalid priority: '{0}'. Valid values: low, medium, high, critical")]
    Priority(String),

    /// Value did not name a verification state.
    #[error("Invalid verification state: '{0}'. Valid values: unverified, reviewed, verified")]
    VerificationState(String),

    /// Value did not name a gap type.
    #[error(
        "Invalid gap type: '{0}'. Valid values: missing_control, partial_coverage, \
         scope_difference, additional_requirement, evidence_gap"
    )]
    GapType(String),

    /// Value did not name a gap workflow status.
    #[error(
        "Invalid gap status: '{0}'. Valid values: identified, planned, in_progress, \
         resolved, wont_fix"
    )]
    GapStatus(String),

    /// Value did not name an identification source.
    #[error("Invalid identification source: '{0}'. Valid values: algorithm, manual")]
    IdentificationSource(String),

    /// Value did not name a keyword category.
    #[error("Invalid keyword category: '{0}'")]
    KeywordCategory(String),
}
