//! Score aggregation: mapping percentage, confidence, quality.
//!
//! All weights and thresholds here are part of the algorithm contract;
//! changing any of them changes every stored score, which is why the
//! version tag exists.

use crate::types::mapping::VerificationState;
use crate::types::requirement::RequirementMeta;

/// Version tag stamped on every analysis result.
pub const ALGORITHM_VERSION: &str = "1.0.0";

/// Weight of keyword overlap in the combined percentage.
pub const KEYWORD_COMPONENT_WEIGHT: f64 = 0.40;

/// Weight of textual similarity in the combined percentage.
pub const TEXTUAL_COMPONENT_WEIGHT: f64 = 0.35;

/// Weight of structural similarity in the combined percentage.
pub const STRUCTURAL_COMPONENT_WEIGHT: f64 = 0.25;

/// Ceiling of the mapping-percentage scale. Modifiers can push strong
/// mappings past 100; this is the hard cap.
pub const MAX_PERCENTAGE: u32 = 150;

/// Bonus when both requirements come from ISO-family frameworks.
pub const ISO_FAMILY_BONUS: f64 = 5.0;

/// Bonus when both requirements come from EU regulations.
pub const EU_FAMILY_BONUS: f64 = 5.0;

/// EU regulations that count as one framework family.
pub const EU_FRAMEWORKS: &[&str] = &["GDPR", "NIS2", "DORA"];

/// Penalty when the source maps onto a very broad set of controls.
pub const BROAD_MAPPING_PENALTY: f64 = 10.0;

/// Linked-control count beyond which a mapping counts as broad.
pub const BROAD_MAPPING_THRESHOLD: usize = 10;

/// Starting confidence before any bonus or penalty.
pub const BASE_CONFIDENCE: i32 = 50;

/// Keyword overlap above this earns the strong-overlap confidence bonus.
pub const STRONG_OVERLAP_THRESHOLD: f64 = 0.7;

/// Confidence below this flags the mapping for manual review.
pub const REVIEW_CONFIDENCE_THRESHOLD: u32 = 70;

/// Weight of confidence in the quality score.
pub const QUALITY_CONFIDENCE_WEIGHT: f64 = 0.4;

/// Weight of (capped) mapping strength in the quality score.
pub const QUALITY_STRENGTH_WEIGHT: f64 = 0.3;

/// Combined mapping percentage on the 0-150 scale.
///
/// Weighted sum of the three metrics scaled to 100, plus the framework and
/// scope modifiers, rounded once and clamped.
pub fn combined_percentage(
    keyword_overlap: f64,
    textual_similarity: f64,
    structural_similarity: f64,
    source: &RequirementMeta,
    target: &RequirementMeta,
) -> u32 {
    let base = (keyword_overlap * KEYWORD_COMPONENT_WEIGHT
        + textual_similarity * TEXTUAL_COMPONENT_WEIGHT
        + structural_similarity * STRUCTURAL_COMPONENT_WEIGHT)
        * 100.0;
    let modified = apply_modifiers(base, source, target);
    round_score(modified).clamp(0.0, MAX_PERCENTAGE as f64) as u32
}

/// Framework and scope modifiers applied to the raw percentage.
pub fn apply_modifiers(base: f64, source: &RequirementMeta, target: &RequirementMeta) -> f64 {
    let mut score = base;

    if source.framework.starts_with("ISO") && target.framework.starts_with("ISO") {
        score += ISO_FAMILY_BONUS;
    }

    if EU_FRAMEWORKS.contains(&source.framework.as_str())
        && EU_FRAMEWORKS.contains(&target.framework.as_str())
    {
        score += EU_FAMILY_BONUS;
    }

    // Mapping onto many controls at once signals a broad, vague mapping.
    if source.linked_control_count() > BROAD_MAPPING_THRESHOLD {
        score -= BROAD_MAPPING_PENALTY;
    }

    score
}

/// Population variance of the given values; 0.0 for an empty slice.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// Confidence in the similarity judgment, 0-100.
///
/// Starts at [`BASE_CONFIDENCE`] and rewards metric agreement (low
/// variance across the three metrics), enough text on both sides, and
/// strong keyword overlap. Thin texts cost 10 points.
pub fn confidence_score(
    keyword_overlap: f64,
    textual_similarity: f64,
    structural_similarity: f64,
    source_token_count: usize,
    target_token_count: usize,
) -> u32 {
    let mut confidence = BASE_CONFIDENCE;

    // Metric agreement: the tighter the three metrics sit together, the
    // more the combined score can be trusted.
    let variance = population_variance(&[
        textual_similarity,
        keyword_overlap,
        structural_similarity,
    ]);
    if variance < 0.05 {
        confidence += 30;
    } else if variance < 0.10 {
        confidence += 20;
    } else if variance < 0.15 {
        confidence += 10;
    }

    // Text volume: judgments over a handful of tokens are guesses.
    let min_words = source_token_count.min(target_token_count);
    if min_words > 100 {
        confidence += 15;
    } else if min_words > 50 {
        confidence += 10;
    } else if min_words > 20 {
        confidence += 5;
    } else {
        confidence -= 10;
    }

    if keyword_overlap > STRONG_OVERLAP_THRESHOLD {
        confidence += 10;
    }

    confidence.clamp(0, 100) as u32
}

/// Overall mapping quality, 0-100.
///
/// Blends confidence, mapping strength capped at 100, and the
/// verification bonus.
pub fn quality_score(
    confidence: u32,
    calculated_percentage: u32,
    verification: VerificationState,
) -> u32 {
    let quality = f64::from(confidence) * QUALITY_CONFIDENCE_WEIGHT
        + f64::from(calculated_percentage.min(100)) * QUALITY_STRENGTH_WEIGHT
        + f64::from(verification.quality_bonus());
    round_score(quality).clamp(0.0, 100.0) as u32
}

/// Round to a whole number of points, deciding half boundaries on the
/// decimal value. The weight products can land a few ulps under an exact
/// half, so the value is snapped to nine decimals before the final round.
pub fn round_score(value: f64) -> f64 {
    ((value * 1.0e9).round() / 1.0e9).round()
}

/// Round a similarity to the 4 decimals stored on the result record.
pub fn round_similarity(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
