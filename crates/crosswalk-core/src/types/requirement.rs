//! Requirement-side input types: analysis text, priority, metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// The text of a requirement as the engine analyzes it: the space-joined
/// concatenation of its title and description. Derived by the caller from
/// its own entities; consumed read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementText(String);

impl RequirementText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build from optional title and description. Absent parts are skipped;
    /// both absent yields the empty text.
    pub fn from_parts(title: Option<&str>, description: Option<&str>) -> Self {
        let joined = [title, description]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        Self(joined)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw byte length. Drives the additional-requirement length comparison.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RequirementText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for RequirementText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for RequirementText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Priority scale shared by requirements and gap items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Ordinal position used for priority-distance scoring.
    ///
    /// # Returns
    /// Low: 1, Medium: 2, High: 3, Critical: 4
    #[inline]
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// Lowercase label as stored by the surrounding system.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// All variants in ascending severity order.
    #[inline]
    pub fn all() -> [Priority; 4] {
        [Self::Low, Self::Medium, Self::High, Self::Critical]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseError::Priority(s.to_string())),
        }
    }
}

/// Structured metadata of one requirement side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementMeta {
    /// Free-form category name, e.g. "Access Control". Absent categories
    /// skip the category factor of the structural comparison.
    pub category: Option<String>,
    /// Requirement priority. Absent priorities skip the priority factor.
    pub priority: Option<Priority>,
    /// Code of the framework this requirement belongs to, e.g. "ISO27001".
    pub framework: String,
    /// Identifiers of external controls linked to this requirement.
    /// `None` means the field is absent from the source data, which skips
    /// the linked-control factor entirely.
    pub linked_controls: Option<Vec<String>>,
}

impl RequirementMeta {
    pub fn new(framework: impl Into<String>) -> Self {
        Self {
            framework: framework.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_linked_controls(mut self, controls: Vec<String>) -> Self {
        self.linked_controls = Some(controls);
        self
    }

    /// Number of linked external controls, 0 when the field is absent.
    #[inline]
    pub fn linked_control_count(&self) -> usize {
        self.linked_controls.as_ref().map_or(0, Vec::len)
    }

    /// Whether the linked-controls field is present at all. An empty list
    /// still counts as present for the structural comparison.
    #[inline]
    pub fn has_linked_controls(&self) -> bool {
        self.linked_controls.is_some()
    }
}

/// One side of a mapping as the engine sees it: analysis text plus
/// structured metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub text: RequirementText,
    pub meta: RequirementMeta,
}

impl Requirement {
    pub fn new(text: impl Into<RequirementText>, meta: RequirementMeta) -> Self {
        Self {
            text: text.into(),
            meta,
        }
    }
}
