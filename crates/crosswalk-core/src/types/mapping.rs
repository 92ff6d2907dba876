//! Mapping-level input types: verification state and stored metrics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Review state of a mapping as tracked by the surrounding workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationState {
    /// Neither reviewed nor formally verified.
    #[default]
    Unverified,
    /// Looked over by a second person, not yet formally verified.
    Reviewed,
    /// Formally verified.
    Verified,
}

impl VerificationState {
    /// Bonus points this state contributes to the quality score.
    ///
    /// # Returns
    /// Unverified: 0, Reviewed: 20, Verified: 30
    #[inline]
    pub fn quality_bonus(&self) -> u32 {
        match self {
            Self::Unverified => 0,
            Self::Reviewed => 20,
            Self::Verified => 30,
        }
    }

    /// Lowercase label as stored by the surrounding system.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::Reviewed => "reviewed",
            Self::Verified => "verified",
        }
    }

    /// All variants in ascending assurance order.
    #[inline]
    pub fn all() -> [VerificationState; 3] {
        [Self::Unverified, Self::Reviewed, Self::Verified]
    }
}

impl fmt::Display for VerificationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VerificationState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unverified" => Ok(Self::Unverified),
            "reviewed" => Ok(Self::Reviewed),
            "verified" => Ok(Self::Verified),
            _ => Err(ParseError::VerificationState(s.to_string())),
        }
    }
}

/// Stored state of the mapping under analysis.
///
/// `stored_percentage` and `stored_textual_similarity` are the values
/// currently persisted on the mapping, possibly from an earlier run or a
/// manual override. The evidence-gap rule compares these two stored values
/// against each other on purpose: a high claimed percentage contradicted by
/// a middling persisted similarity is the signal it looks for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingState {
    pub verification: VerificationState,
    /// Mapping percentage currently on record, 0-150 scale.
    pub stored_percentage: Option<u32>,
    /// Textual similarity currently on record, 0.0-1.0.
    pub stored_textual_similarity: Option<f64>,
}

impl MappingState {
    pub fn new(verification: VerificationState) -> Self {
        Self {
            verification,
            ..Default::default()
        }
    }

    pub fn with_stored_metrics(mut self, percentage: u32, textual_similarity: f64) -> Self {
        self.stored_percentage = Some(percentage);
        self.stored_textual_similarity = Some(textual_similarity);
        self
    }
}
