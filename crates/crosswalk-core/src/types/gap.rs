//! Gap records: typed deficiencies identified on a mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::types::requirement::Priority;

/// Category of deficiency a gap rule can flag on a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapType {
    /// Target-side concepts with no source-side counterpart.
    MissingControl,
    /// Texts are related but far from equivalent.
    PartialCoverage,
    /// Metadata points to different control scopes.
    ScopeDifference,
    /// Target demands noticeably more than the source provides.
    AdditionalRequirement,
    /// Strong claimed mapping resting on weak textual evidence.
    EvidenceGap,
}

impl GapType {
    /// Lowercase label as stored by the surrounding system.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingControl => "missing_control",
            Self::PartialCoverage => "partial_coverage",
            Self::ScopeDifference => "scope_difference",
            Self::AdditionalRequirement => "additional_requirement",
            Self::EvidenceGap => "evidence_gap",
        }
    }

    /// Human-readable description of what this gap type detects.
    #[inline]
    pub fn description(&self) -> &'static str {
        match self {
            Self::MissingControl => {
                "The source requirement does not cover concepts the target requires"
            }
            Self::PartialCoverage => {
                "The requirements are textually related but far from equivalent"
            }
            Self::ScopeDifference => {
                "Category, priority, or linked controls point to different scopes"
            }
            Self::AdditionalRequirement => {
                "The target requirement demands substantially more than the source"
            }
            Self::EvidenceGap => {
                "A high mapping percentage is not backed by textual similarity"
            }
        }
    }

    /// All variants in rule evaluation order.
    #[inline]
    pub fn all() -> [GapType; 5] {
        [
            Self::MissingControl,
            Self::PartialCoverage,
            Self::ScopeDifference,
            Self::AdditionalRequirement,
            Self::EvidenceGap,
        ]
    }
}

impl fmt::Display for GapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GapType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "missing_control" => Ok(Self::MissingControl),
            "partial_coverage" => Ok(Self::PartialCoverage),
            "scope_difference" => Ok(Self::ScopeDifference),
            "additional_requirement" => Ok(Self::AdditionalRequirement),
            "evidence_gap" => Ok(Self::EvidenceGap),
            _ => Err(ParseError::GapType(s.to_string())),
        }
    }
}

/// Workflow status of a gap item. The engine always emits [`Identified`];
/// later transitions belong to the surrounding workflow layer.
///
/// [`Identified`]: GapStatus::Identified
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapStatus {
    #[default]
    Identified,
    Planned,
    InProgress,
    Resolved,
    WontFix,
}

impl GapStatus {
    /// Lowercase label as stored by the surrounding system.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Identified => "identified",
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::WontFix => "wont_fix",
        }
    }

    /// All variants in workflow order.
    #[inline]
    pub fn all() -> [GapStatus; 5] {
        [
            Self::Identified,
            Self::Planned,
            Self::InProgress,
            Self::Resolved,
            Self::WontFix,
        ]
    }
}

impl fmt::Display for GapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GapStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "identified" => Ok(Self::Identified),
            "planned" => Ok(Self::Planned),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "wont_fix" => Ok(Self::WontFix),
            _ => Err(ParseError::GapStatus(s.to_string())),
        }
    }
}

/// How a gap item came into existence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentificationSource {
    /// Emitted by the rule engine.
    #[default]
    Algorithm,
    /// Entered by a person.
    Manual,
}

impl IdentificationSource {
    /// Lowercase label as stored by the surrounding system.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Algorithm => "algorithm",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for IdentificationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IdentificationSource {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "algorithm" => Ok(Self::Algorithm),
            "manual" => Ok(Self::Manual),
            _ => Err(ParseError::IdentificationSource(s.to_string())),
        }
    }
}

/// One identified deficiency on a mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapItem {
    pub gap_type: GapType,
    pub priority: Priority,
    /// Generated explanation of the deficiency.
    pub description: String,
    /// Target-side keywords the source does not cover. Empty for rules that
    /// do not reason about keywords.
    pub missing_keywords: Vec<String>,
    /// Generated remediation guidance.
    pub recommended_action: String,
    /// How many mapping-percentage points this deficiency is worth.
    pub percentage_impact: u32,
    /// Rule confidence in this finding, 0-100.
    pub confidence: u32,
    /// Estimated remediation effort in hours. `None` on manually entered
    /// gaps; every rule sets it.
    pub estimated_effort: Option<u32>,
    pub status: GapStatus,
    pub identification_source: IdentificationSource,
}

impl GapItem {
    /// New algorithm-identified gap in freshly created state. Rule-specific
    /// fields start empty and are filled by the builder methods.
    pub fn identified(gap_type: GapType, priority: Priority) -> Self {
        Self {
            gap_type,
            priority,
            description: String::new(),
            missing_keywords: Vec::new(),
            recommended_action: String::new(),
            percentage_impact: 0,
            confidence: 0,
            estimated_effort: None,
            status: GapStatus::Identified,
            identification_source: IdentificationSource::Algorithm,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_missing_keywords(mut self, keywords: Vec<String>) -> Self {
        self.missing_keywords = keywords;
        self
    }

    pub fn with_recommended_action(mut self, action: impl Into<String>) -> Self {
        self.recommended_action = action.into();
        self
    }

    pub fn with_impact(mut self, impact: u32) -> Self {
        self.percentage_impact = impact;
        self
    }

    pub fn with_confidence(mut self, confidence: u32) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_effort(mut self, hours: u32) -> Self {
        self.estimated_effort = Some(hours);
        self
    }
}
