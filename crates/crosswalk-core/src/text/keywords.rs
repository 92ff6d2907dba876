//! Security-control keyword dictionary and extraction.
//!
//! The dictionary groups ~120 terms into 15 control categories. Extraction
//! is plain substring matching over normalized text; the dictionary order
//! makes every extraction deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Weight of the category-alignment bonus inside [`keyword_overlap`].
pub const CATEGORY_BONUS_WEIGHT: f64 = 0.2;

/// Security-control topic buckets used for keyword matching and
/// category-alignment bonuses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    AccessControl,
    Encryption,
    Audit,
    DataProtection,
    Network,
    Incident,
    Vulnerability,
    Backup,
    Physical,
    Policy,
    Risk,
    Compliance,
    Training,
    Supplier,
    Change,
}

impl KeywordCategory {
    /// Lowercase label as stored by the surrounding system.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::AccessControl => "access_control",
            Self::Encryption => "encryption",
            Self::Audit => "audit",
            Self::DataProtection => "data_protection",
            Self::Network => "network",
            Self::Incident => "incident",
            Self::Vulnerability => "vulnerability",
            Self::Backup => "backup",
            Self::Physical => "physical",
            Self::Policy => "policy",
            Self::Risk => "risk",
            Self::Compliance => "compliance",
            Self::Training => "training",
            Self::Supplier => "supplier",
            Self::Change => "change",
        }
    }

    /// All categories in dictionary order.
    #[inline]
    pub fn all() -> [KeywordCategory; 15] {
        [
            Self::AccessControl,
            Self::Encryption,
            Self::Audit,
            Self::DataProtection,
            Self::Network,
            Self::Incident,
            Self::Vulnerability,
            Self::Backup,
            Self::Physical,
            Self::Policy,
            Self::Risk,
            Self::Compliance,
            Self::Training,
            Self::Supplier,
            Self::Change,
        ]
    }

    /// The terms this category matches on.
    #[inline]
    pub fn terms(&self) -> &'static [&'static str] {
        KEYWORD_TABLE[*self as usize].1
    }
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for KeywordCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "access_control" => Ok(Self::AccessControl),
            "encryption" => Ok(Self::Encryption),
            "audit" => Ok(Self::Audit),
            "data_protection" => Ok(Self::DataProtection),
            "network" => Ok(Self::Network),
            "incident" => Ok(Self::Incident),
            "vulnerability" => Ok(Self::Vulnerability),
            "backup" => Ok(Self::Backup),
            "physical" => Ok(Self::Physical),
            "policy" => Ok(Self::Policy),
            "risk" => Ok(Self::Risk),
            "compliance" => Ok(Self::Compliance),
            "training" => Ok(Self::Training),
            "supplier" => Ok(Self::Supplier),
            "change" => Ok(Self::Change),
            _ => Err(ParseError::KeywordCategory(s.to_string())),
        }
    }
}

/// Keyword dictionary: one entry per category, terms in matching order.
/// Terms are pre-normalized (lowercase, single spaces). A term may appear
/// under more than one category, e.g. "surveillance" or "recovery".
pub const KEYWORD_TABLE: &[(KeywordCategory, &[&str])] = &[
    (
        KeywordCategory::AccessControl,
        &[
            "access",
            "authentication",
            "authorization",
            "identity",
            "login",
            "password",
            "credential",
            "privileged",
            "least privilege",
            "role",
            "rbac",
            "permission",
        ],
    ),
    (
        KeywordCategory::Encryption,
        &[
            "encryption",
            "encrypted",
            "cryptographic",
            "cipher",
            "key management",
            "tls",
            "ssl",
            "hash",
            "secure communication",
        ],
    ),
    (
        KeywordCategory::Audit,
        &[
            "audit",
            "logging",
            "log",
            "monitoring",
            "review",
            "trail",
            "tracking",
            "surveillance",
            "recording",
        ],
    ),
    (
        KeywordCategory::DataProtection,
        &[
            "data protection",
            "privacy",
            "personal data",
            "sensitive",
            "confidential",
            "classification",
            "gdpr",
            "pii",
            "retention",
            "disposal",
        ],
    ),
    (
        KeywordCategory::Network,
        &[
            "network",
            "firewall",
            "segmentation",
            "boundary",
            "perimeter",
            "dmz",
            "intrusion",
            "ids",
            "ips",
        ],
    ),
    (
        KeywordCategory::Incident,
        &[
            "incident",
            "breach",
            "response",
            "recovery",
            "contingency",
            "emergency",
            "crisis",
        ],
    ),
    (
        KeywordCategory::Vulnerability,
        &[
            "vulnerability",
            "patch",
            "update",
            "scanning",
            "assessment",
            "penetration test",
            "security testing",
        ],
    ),
    (
        KeywordCategory::Backup,
        &[
            "backup",
            "restore",
            "recovery",
            "redundancy",
            "replication",
            "disaster recovery",
            "business continuity",
        ],
    ),
    (
        KeywordCategory::Physical,
        &[
            "physical",
            "facility",
            "premises",
            "badge",
            "cctv",
            "surveillance",
            "visitor",
        ],
    ),
    (
        KeywordCategory::Policy,
        &[
            "policy",
            "procedure",
            "standard",
            "guideline",
            "documentation",
            "governance",
        ],
    ),
    (
        KeywordCategory::Risk,
        &[
            "risk",
            "assessment",
            "analysis",
            "mitigation",
            "treatment",
            "acceptance",
            "threat",
        ],
    ),
    (
        KeywordCategory::Compliance,
        &[
            "compliance",
            "regulation",
            "requirement",
            "legal",
            "statutory",
            "mandatory",
        ],
    ),
    (
        KeywordCategory::Training,
        &[
            "training",
            "awareness",
            "education",
            "competence",
            "qualification",
        ],
    ),
    (
        KeywordCategory::Supplier,
        &[
            "supplier",
            "vendor",
            "third party",
            "outsourcing",
            "contractor",
            "service provider",
        ],
    ),
    (
        KeywordCategory::Change,
        &[
            "change management",
            "change control",
            "version control",
            "configuration",
        ],
    ),
];

/// Find every dictionary term contained in the normalized text.
///
/// Terms match as plain substrings, so "encrypted" also matches text
/// saying "unencrypted". The result is deduplicated and ordered by the
/// dictionary. Empty text yields no keywords.
pub fn extract_keywords(normalized: &str) -> Vec<&'static str> {
    let mut keywords = Vec::new();
    if normalized.is_empty() {
        return keywords;
    }
    for (_, terms) in KEYWORD_TABLE {
        for &term in *terms {
            if normalized.contains(term) && !keywords.contains(&term) {
                keywords.push(term);
            }
        }
    }
    keywords
}

/// Union of the categories any of the given keywords belongs to.
pub fn categories_of(keywords: &[&str]) -> BTreeSet<KeywordCategory> {
    let mut categories = BTreeSet::new();
    for (category, terms) in KEYWORD_TABLE {
        if keywords.iter().any(|kw| terms.contains(kw)) {
            categories.insert(*category);
        }
    }
    categories
}

/// Jaccard alignment of two category sets; 0.0 when either is empty.
pub fn category_alignment(a: &BTreeSet<KeywordCategory>, b: &BTreeSet<KeywordCategory>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}

/// Keyword overlap between the two sides of a mapping.
///
/// Jaccard over the keyword sets, plus [`CATEGORY_BONUS_WEIGHT`] times the
/// category alignment, clamped to 1.0. Zero when either side matched no
/// keywords at all.
pub fn keyword_overlap(source: &[&str], target: &[&str]) -> f64 {
    if source.is_empty() || target.is_empty() {
        return 0.0;
    }

    let source_set: BTreeSet<&str> = source.iter().copied().collect();
    let target_set: BTreeSet<&str> = target.iter().copied().collect();
    let intersection = source_set.intersection(&target_set).count() as f64;
    let union = source_set.union(&target_set).count() as f64;
    let base = intersection / union;

    let bonus =
        category_alignment(&categories_of(source), &categories_of(target)) * CATEGORY_BONUS_WEIGHT;

    (base + bonus).min(1.0)
}
