//! Structural similarity over requirement metadata.
//!
//! Compares what the texts cannot show: declared categories, priorities,
//! and how many external controls the source side already links.

use crate::types::requirement::{Priority, RequirementMeta};

/// Weight of the category-match factor.
pub const CATEGORY_WEIGHT: f64 = 0.4;

/// Weight of the priority-alignment factor.
pub const PRIORITY_WEIGHT: f64 = 0.3;

/// Weight of the linked-control-count factor.
pub const LINKED_CONTROL_WEIGHT: f64 = 0.3;

/// Linked-control count at which the third factor earns full credit.
pub const LINKED_CONTROL_SATURATION: usize = 3;

/// Score when no metadata factor is present on either side.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Category names treated as matching even when they differ literally.
pub const RELATED_CATEGORY_GROUPS: &[&[&str]] = &[
    &[
        "access control",
        "authentication",
        "authorization",
        "identity management",
    ],
    &["encryption", "cryptography", "data protection"],
    &["network security", "network", "firewall", "perimeter security"],
    &["incident response", "incident management", "business continuity"],
    &["audit", "logging", "monitoring"],
    &["risk management", "risk assessment"],
];

/// Whether two category names refer to the same control area: exact
/// case-insensitive match, or co-membership in a related group.
pub fn categories_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b {
        return true;
    }
    RELATED_CATEGORY_GROUPS
        .iter()
        .any(|group| group.contains(&a.as_str()) && group.contains(&b.as_str()))
}

/// Priority closeness by ordinal distance.
///
/// # Returns
/// Distance 0: 1.0, 1: 0.7, 2: 0.4, 3 or more: 0.1
pub fn priority_alignment(a: Priority, b: Priority) -> f64 {
    let distance = (i16::from(a.ordinal()) - i16::from(b.ordinal())).unsigned_abs();
    match distance {
        0 => 1.0,
        1 => 0.7,
        2 => 0.4,
        _ => 0.1,
    }
}

/// Weighted structural similarity over up to three metadata factors.
///
/// A factor only counts when its inputs are present: the category factor
/// needs a category on both sides, the priority factor a priority on both
/// sides, and the linked-control factor the field on the source side (an
/// empty list still counts as present). The result is the plain weighted
/// sum, so partially present metadata caps the score at the participating
/// weights. With no factor present the metadata says nothing either way:
/// [`NEUTRAL_SCORE`].
pub fn structural_similarity(source: &RequirementMeta, target: &RequirementMeta) -> f64 {
    let mut score = 0.0;
    let mut factors = 0u32;

    if let (Some(source_category), Some(target_category)) = (&source.category, &target.category) {
        factors += 1;
        if categories_match(source_category, target_category) {
            score += CATEGORY_WEIGHT;
        }
    }

    if let (Some(source_priority), Some(target_priority)) = (source.priority, target.priority) {
        factors += 1;
        score += PRIORITY_WEIGHT * priority_alignment(source_priority, target_priority);
    }

    if source.has_linked_controls() {
        factors += 1;
        let saturation = source.linked_control_count() as f64 / LINKED_CONTROL_SATURATION as f64;
        score += LINKED_CONTROL_WEIGHT * saturation.min(1.0);
    }

    if factors == 0 {
        return NEUTRAL_SCORE;
    }
    score
}
