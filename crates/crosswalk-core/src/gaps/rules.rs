//! The five gap rules.
//!
//! Each rule is a pure function from the analysis of one mapping to at most
//! one [`GapItem`]. Rules are independent; the [`GapAnalyzer`] evaluates
//! them in a fixed order so repeated runs produce identical gap lists.
//!
//! [`GapAnalyzer`]: crate::gaps::GapAnalyzer

use crate::analysis::scoring::round_score;
use crate::gaps::remediation::recommended_action;
use crate::types::analysis::AnalysisResult;
use crate::types::gap::{GapItem, GapType};
use crate::types::mapping::MappingState;
use crate::types::requirement::{Priority, Requirement};

/// Missing keywords that make a missing-control gap critical.
pub const CRITICAL_KEYWORDS: &[&str] = &[
    "encryption",
    "authentication",
    "authorization",
    "audit",
    "logging",
];

/// Missing keywords that make a missing-control gap high priority.
pub const HIGH_KEYWORDS: &[&str] = &[
    "access control",
    "monitoring",
    "backup",
    "incident",
    "vulnerability",
];

/// Textual similarity must sit strictly inside this band for the
/// partial-coverage rule to fire.
pub const PARTIAL_COVERAGE_LOWER: f64 = 0.3;
pub const PARTIAL_COVERAGE_UPPER: f64 = 0.7;

/// Structural similarity below this flags a scope difference.
pub const SCOPE_DIFFERENCE_THRESHOLD: f64 = 0.5;

/// Target text must be longer than the source by this factor before it
/// counts as carrying additional requirements.
pub const ADDITIONAL_LENGTH_RATIO: f64 = 1.5;

/// Target-only keyword count must exceed this for the
/// additional-requirement rule to fire.
pub const ADDITIONAL_KEYWORD_THRESHOLD: usize = 5;

/// Stored mapping percentage above which an evidence gap becomes possible.
pub const EVIDENCE_PERCENTAGE_THRESHOLD: u32 = 80;

/// Stored textual similarity must sit strictly inside this band for the
/// evidence-gap rule to fire.
pub const EVIDENCE_SIMILARITY_LOWER: f64 = 0.5;
pub const EVIDENCE_SIMILARITY_UPPER: f64 = 0.7;

/// Rule 1: target-side concepts the source does not cover.
///
/// Fires whenever the target text produced at least one keyword the source
/// text did not. Priority and impact follow the importance of what is
/// missing; the remediation text comes from the topic table.
pub fn missing_control(analysis: &AnalysisResult) -> Option<GapItem> {
    let missing = analysis.extracted_keywords.missing_in_source();
    if missing.is_empty() {
        return None;
    }

    let critical = missing
        .iter()
        .filter(|kw| CRITICAL_KEYWORDS.contains(&kw.as_str()))
        .count();
    let high = missing
        .iter()
        .filter(|kw| HIGH_KEYWORDS.contains(&kw.as_str()))
        .count();

    let (priority, impact) = if critical > 0 {
        (Priority::Critical, 30)
    } else if high > 0 {
        (Priority::High, 20)
    } else if missing.len() > 5 {
        (Priority::High, 25)
    } else {
        (Priority::Medium, 15)
    };

    let listed = missing.iter().take(10).cloned().collect::<Vec<_>>().join(", ");
    let description = format!(
        "The source requirement does not cover the following concepts required by the target \
         requirement: {listed}. These aspects must be implemented additionally to reach full \
         compliance."
    );

    // Two hours per critical concept, one per high, half an hour for the rest.
    let rest = missing.len() - critical - high;
    let effort = (2.0 * critical as f64 + high as f64 + 0.5 * rest as f64).ceil() as u32;

    let confidence = missing_keyword_confidence(missing.len());
    let action = recommended_action(&missing);

    Some(
        GapItem::identified(GapType::MissingControl, priority)
            .with_description(description)
            .with_missing_keywords(missing)
            .with_recommended_action(action)
            .with_impact(impact)
            .with_confidence(confidence)
            .with_effort(effort),
    )
}

/// Rule 2: texts are related but far from equivalent.
///
/// Fires when textual similarity sits strictly between
/// [`PARTIAL_COVERAGE_LOWER`] and [`PARTIAL_COVERAGE_UPPER`].
pub fn partial_coverage(analysis: &AnalysisResult) -> Option<GapItem> {
    let similarity = analysis.textual_similarity;
    if similarity <= PARTIAL_COVERAGE_LOWER || similarity >= PARTIAL_COVERAGE_UPPER {
        return None;
    }

    let coverage = round_score(similarity * 100.0) as u32;
    let priority = if coverage < 50 {
        Priority::High
    } else {
        Priority::Medium
    };
    let description = format!(
        "The source requirement covers the target requirement only to about {coverage}%. The \
         textual match is incomplete. Additional measures are required to cover the missing \
         aspects."
    );

    Some(
        GapItem::identified(GapType::PartialCoverage, priority)
            .with_description(description)
            .with_impact(round_score((1.0 - similarity) * 30.0) as u32)
            .with_confidence(coverage_confidence(similarity))
            .with_recommended_action(
                "Run a detailed gap analysis: compare the target requirement against the source \
                 requirement and identify the specific missing aspects. Then implement \
                 supplementary controls or extend the existing ones.",
            )
            .with_effort(round_score((1.0 - similarity) * 10.0) as u32),
    )
}

/// Rule 3: metadata points to different control scopes.
///
/// Fires when structural similarity falls below
/// [`SCOPE_DIFFERENCE_THRESHOLD`].
pub fn scope_difference(
    analysis: &AnalysisResult,
    source: &Requirement,
    target: &Requirement,
) -> Option<GapItem> {
    if analysis.structural_similarity >= SCOPE_DIFFERENCE_THRESHOLD {
        return None;
    }

    let source_category = source.meta.category.as_deref().unwrap_or("Unknown");
    let target_category = target.meta.category.as_deref().unwrap_or("Unknown");
    let description = format!(
        "Scope difference detected: the source requirement (category: {source_category}) and \
         the target requirement (category: {target_category}) have different focus areas or \
         scopes. A one-to-one transfer is not fully possible."
    );

    Some(
        GapItem::identified(GapType::ScopeDifference, Priority::Medium)
            .with_description(description)
            .with_impact(15)
            .with_confidence(65)
            .with_recommended_action(
                "Check whether the differing scopes can be covered by combining several source \
                 requirements, or whether additional controls specific to the target scope are \
                 required.",
            )
            .with_effort(4),
    )
}

/// Rule 4: the target demands noticeably more than the source provides.
///
/// Fires when the target text is longer than the source by more than
/// [`ADDITIONAL_LENGTH_RATIO`] and carries more than
/// [`ADDITIONAL_KEYWORD_THRESHOLD`] keywords of its own.
pub fn additional_requirement(
    analysis: &AnalysisResult,
    source: &Requirement,
    target: &Requirement,
) -> Option<GapItem> {
    let target_only = analysis.extracted_keywords.missing_in_source();

    let longer = target.text.len() as f64 > source.text.len() as f64 * ADDITIONAL_LENGTH_RATIO;
    if !longer || target_only.len() <= ADDITIONAL_KEYWORD_THRESHOLD {
        return None;
    }

    let description = format!(
        "The target requirement has additional demands that go beyond the source requirement. \
         {} additional concepts were identified that are not present in the source.",
        target_only.len()
    );

    let confidence = additional_confidence(target_only.len());
    let effort = (target_only.len() as f64 * 0.5).ceil() as u32;

    Some(
        GapItem::identified(GapType::AdditionalRequirement, Priority::High)
            .with_description(description)
            .with_missing_keywords(target_only.into_iter().take(20).collect())
            .with_impact(25)
            .with_confidence(confidence)
            .with_recommended_action(
                "The additional demands of the target requirement must be implemented \
                 separately. Check whether other requirements of the source framework cover \
                 these aspects, or whether new controls are required.",
            )
            .with_effort(effort),
    )
}

/// Rule 5: a strong claimed mapping resting on weak textual evidence.
///
/// Works on the STORED metrics of the mapping, not the fresh analysis: a
/// persisted percentage above [`EVIDENCE_PERCENTAGE_THRESHOLD`] combined
/// with a persisted similarity strictly inside the evidence band suggests
/// the control exists but its documentation is thin. Mappings without
/// stored metrics never fire this rule.
pub fn evidence_gap(mapping: &MappingState) -> Option<GapItem> {
    let percentage = mapping.stored_percentage?;
    let similarity = mapping.stored_textual_similarity?;

    if percentage <= EVIDENCE_PERCENTAGE_THRESHOLD
        || similarity <= EVIDENCE_SIMILARITY_LOWER
        || similarity >= EVIDENCE_SIMILARITY_UPPER
    {
        return None;
    }

    Some(
        GapItem::identified(GapType::EvidenceGap, Priority::Medium)
            .with_description(
                "The control appears to be in place, but complete documentation or evidence of \
                 its implementation may be missing. The stored mapping percentage is high while \
                 the textual similarity points to gaps.",
            )
            .with_impact(10)
            .with_confidence(70)
            .with_recommended_action(
                "Complete the documentation: write detailed descriptions of the implemented \
                 controls, collect the evidence (screenshots, policies, records), and document \
                 the implementation according to the target framework.",
            )
            .with_effort(3),
    )
}

/// Confidence that a missing-keyword set marks a real gap. More missing
/// keywords mean a clearer signal.
fn missing_keyword_confidence(count: usize) -> u32 {
    if count > 10 {
        85
    } else if count > 5 {
        75
    } else if count > 2 {
        65
    } else {
        50
    }
}

/// Confidence in a partial-coverage finding. Mid-band similarity is the
/// clearest evidence of a genuine partial overlap.
fn coverage_confidence(similarity: f64) -> u32 {
    if similarity > 0.4 && similarity < 0.6 {
        80
    } else if similarity > 0.3 && similarity < 0.7 {
        70
    } else {
        60
    }
}

/// Confidence that target-only keywords mark additional requirements.
fn additional_confidence(count: usize) -> u32 {
    if count > 8 {
        80
    } else if count > 4 {
        70
    } else {
        60
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::analysis::ExtractedKeywords;
    use crate::types::gap::{GapStatus, IdentificationSource};
    use crate::types::requirement::RequirementMeta;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn analysis_with_keywords(source: &[&str], target: &[&str]) -> AnalysisResult {
        AnalysisResult::zero().with_keywords(ExtractedKeywords::new(kw(source), kw(target)))
    }

    fn requirement(text: &str) -> Requirement {
        Requirement::new(text, RequirementMeta::new("ISO27001"))
    }

    // === missing_control ===

    #[test]
    fn test_missing_control_critical_keyword() {
        let analysis = analysis_with_keywords(&[], &["encryption"]);
        let gap = missing_control(&analysis).unwrap();

        assert_eq!(gap.gap_type, GapType::MissingControl);
        assert_eq!(gap.priority, Priority::Critical);
        assert_eq!(gap.percentage_impact, 30);
        assert_eq!(gap.confidence, 50);
        assert_eq!(gap.estimated_effort, Some(2));
        assert_eq!(gap.missing_keywords, kw(&["encryption"]));
        assert_eq!(gap.status, GapStatus::Identified);
        assert_eq!(gap.identification_source, IdentificationSource::Algorithm);
        assert!(gap.recommended_action.contains("Implement encryption controls"));
        println!("[PASS] test_missing_control_critical_keyword");
    }

    #[test]
    fn test_missing_control_high_keyword() {
        let analysis = analysis_with_keywords(&[], &["monitoring"]);
        let gap = missing_control(&analysis).unwrap();
        assert_eq!(gap.priority, Priority::High);
        assert_eq!(gap.percentage_impact, 20);
        println!("[PASS] test_missing_control_high_keyword");
    }

    #[test]
    fn test_missing_control_many_ordinary_keywords() {
        // Six keywords, none critical or high: volume alone raises priority.
        let analysis = analysis_with_keywords(
            &[],
            &["privacy", "sensitive", "confidential", "classification", "retention", "disposal"],
        );
        let gap = missing_control(&analysis).unwrap();
        assert_eq!(gap.priority, Priority::High);
        assert_eq!(gap.percentage_impact, 25);
        assert_eq!(gap.confidence, 75);
        assert_eq!(gap.estimated_effort, Some(3));
        println!("[PASS] test_missing_control_many_ordinary_keywords");
    }

    #[test]
    fn test_missing_control_few_ordinary_keywords() {
        let analysis = analysis_with_keywords(&[], &["privacy", "sensitive"]);
        let gap = missing_control(&analysis).unwrap();
        assert_eq!(gap.priority, Priority::Medium);
        assert_eq!(gap.percentage_impact, 15);
        assert_eq!(gap.confidence, 50);
        assert_eq!(gap.estimated_effort, Some(1));
        println!("[PASS] test_missing_control_few_ordinary_keywords");
    }

    #[test]
    fn test_missing_control_effort_weights_by_importance() {
        // One critical (2h), one high (1h), one other (0.5h): ceil(3.5) = 4.
        let analysis = analysis_with_keywords(&[], &["encryption", "monitoring", "privacy"]);
        let gap = missing_control(&analysis).unwrap();
        assert_eq!(gap.estimated_effort, Some(4));
        assert_eq!(gap.confidence, 65);
        println!("[PASS] test_missing_control_effort_weights_by_importance");
    }

    #[test]
    fn test_missing_control_description_lists_first_ten() {
        let target: Vec<String> = (1..=12).map(|i| format!("k{i:02}")).collect();
        let target_refs: Vec<&str> = target.iter().map(String::as_str).collect();
        let analysis = analysis_with_keywords(&[], &target_refs);

        let gap = missing_control(&analysis).unwrap();
        assert!(gap.description.contains("k10"));
        assert!(!gap.description.contains("k11"));
        // The keyword field still carries the full list.
        assert_eq!(gap.missing_keywords.len(), 12);
        assert_eq!(gap.confidence, 85);
        println!("[PASS] test_missing_control_description_lists_first_ten");
    }

    #[test]
    fn test_missing_control_silent_when_covered() {
        let analysis = analysis_with_keywords(&["access", "audit"], &["access", "audit"]);
        assert!(missing_control(&analysis).is_none());
        println!("[PASS] test_missing_control_silent_when_covered");
    }

    // === partial_coverage ===

    #[test]
    fn test_partial_coverage_mid_band() {
        let analysis = AnalysisResult::zero().with_textual_similarity(0.5);
        let gap = partial_coverage(&analysis).unwrap();

        assert_eq!(gap.gap_type, GapType::PartialCoverage);
        // Coverage 50 is not below 50.
        assert_eq!(gap.priority, Priority::Medium);
        assert_eq!(gap.percentage_impact, 15);
        assert_eq!(gap.confidence, 80);
        assert_eq!(gap.estimated_effort, Some(5));
        assert!(gap.description.contains("50%"));
        println!("[PASS] test_partial_coverage_mid_band");
    }

    #[test]
    fn test_partial_coverage_half_point_impact_rounds_up() {
        // 0.55 puts the impact on a half point: (1 - 0.55) * 30 = 13.5.
        let analysis = AnalysisResult::zero().with_textual_similarity(0.55);
        let gap = partial_coverage(&analysis).unwrap();

        assert_eq!(gap.priority, Priority::Medium);
        assert_eq!(gap.percentage_impact, 14);
        assert_eq!(gap.confidence, 80);
        assert_eq!(gap.estimated_effort, Some(5));
        assert!(gap.description.contains("55%"));
        println!("[PASS] test_partial_coverage_half_point_impact_rounds_up");
    }

    #[test]
    fn test_partial_coverage_low_band_is_high_priority() {
        let analysis = AnalysisResult::zero().with_textual_similarity(0.34);
        let gap = partial_coverage(&analysis).unwrap();

        assert_eq!(gap.priority, Priority::High);
        assert_eq!(gap.percentage_impact, 20);
        assert_eq!(gap.confidence, 70);
        assert_eq!(gap.estimated_effort, Some(7));
        println!("[PASS] test_partial_coverage_low_band_is_high_priority");
    }

    #[test]
    fn test_partial_coverage_upper_band() {
        let analysis = AnalysisResult::zero().with_textual_similarity(0.64);
        let gap = partial_coverage(&analysis).unwrap();

        assert_eq!(gap.priority, Priority::Medium);
        assert_eq!(gap.percentage_impact, 11);
        assert_eq!(gap.confidence, 70);
        assert_eq!(gap.estimated_effort, Some(4));
        println!("[PASS] test_partial_coverage_upper_band");
    }

    #[test]
    fn test_partial_coverage_band_is_strict() {
        for similarity in [0.1, 0.3, 0.7, 0.9] {
            let analysis = AnalysisResult::zero().with_textual_similarity(similarity);
            assert!(partial_coverage(&analysis).is_none(), "fired at {similarity}");
        }
        println!("[PASS] test_partial_coverage_band_is_strict");
    }

    // === scope_difference ===

    #[test]
    fn test_scope_difference_names_both_categories() {
        let analysis = AnalysisResult::zero().with_structural_similarity(0.4);
        let source = Requirement::new(
            "Key rotation",
            RequirementMeta::new("ISO27001").with_category("Cryptography"),
        );
        let target = Requirement::new(
            "Entry badges",
            RequirementMeta::new("SOC2").with_category("Physical Security"),
        );

        let gap = scope_difference(&analysis, &source, &target).unwrap();
        assert_eq!(gap.gap_type, GapType::ScopeDifference);
        assert_eq!(gap.priority, Priority::Medium);
        assert_eq!(gap.percentage_impact, 15);
        assert_eq!(gap.confidence, 65);
        assert_eq!(gap.estimated_effort, Some(4));
        assert!(gap.description.contains("category: Cryptography"));
        assert!(gap.description.contains("category: Physical Security"));
        println!("[PASS] test_scope_difference_names_both_categories");
    }

    #[test]
    fn test_scope_difference_unknown_category_fallback() {
        let analysis = AnalysisResult::zero().with_structural_similarity(0.2);
        let gap = scope_difference(&analysis, &requirement("a"), &requirement("b")).unwrap();
        assert!(gap.description.contains("category: Unknown"));
        println!("[PASS] test_scope_difference_unknown_category_fallback");
    }

    #[test]
    fn test_scope_difference_silent_at_neutral() {
        // The neutral no-metadata score of 0.5 must not flag a scope gap.
        let analysis = AnalysisResult::zero().with_structural_similarity(0.5);
        assert!(scope_difference(&analysis, &requirement("a"), &requirement("b")).is_none());
        println!("[PASS] test_scope_difference_silent_at_neutral");
    }

    // === additional_requirement ===

    fn long_target_pair() -> (Requirement, Requirement) {
        let source = requirement("Short source requirement text.");
        let target = requirement(
            "A much longer target requirement text that goes into considerably more detail \
             about expectations, procedures, and evidence than the source text ever does.",
        );
        (source, target)
    }

    #[test]
    fn test_additional_requirement_fires_on_length_and_keywords() {
        let (source, target) = long_target_pair();
        let analysis =
            analysis_with_keywords(&[], &["privacy", "sensitive", "confidential", "classification", "retention", "disposal"]);

        let gap = additional_requirement(&analysis, &source, &target).unwrap();
        assert_eq!(gap.gap_type, GapType::AdditionalRequirement);
        assert_eq!(gap.priority, Priority::High);
        assert_eq!(gap.percentage_impact, 25);
        assert_eq!(gap.confidence, 70);
        assert_eq!(gap.estimated_effort, Some(3));
        assert!(gap.description.contains("6 additional concepts"));
        println!("[PASS] test_additional_requirement_fires_on_length_and_keywords");
    }

    #[test]
    fn test_additional_requirement_confidence_grows_with_count() {
        let (source, target) = long_target_pair();
        let keywords: Vec<String> = (1..=9).map(|i| format!("k{i}")).collect();
        let keyword_refs: Vec<&str> = keywords.iter().map(String::as_str).collect();
        let analysis = analysis_with_keywords(&[], &keyword_refs);

        let gap = additional_requirement(&analysis, &source, &target).unwrap();
        assert_eq!(gap.confidence, 80);
        assert_eq!(gap.estimated_effort, Some(5));
        println!("[PASS] test_additional_requirement_confidence_grows_with_count");
    }

    #[test]
    fn test_additional_requirement_keeps_first_twenty_keywords() {
        let (source, target) = long_target_pair();
        let keywords: Vec<String> = (1..=22).map(|i| format!("k{i:02}")).collect();
        let keyword_refs: Vec<&str> = keywords.iter().map(String::as_str).collect();
        let analysis = analysis_with_keywords(&[], &keyword_refs);

        let gap = additional_requirement(&analysis, &source, &target).unwrap();
        assert_eq!(gap.missing_keywords.len(), 20);
        assert_eq!(gap.missing_keywords[0], "k01");
        assert_eq!(gap.estimated_effort, Some(11));
        println!("[PASS] test_additional_requirement_keeps_first_twenty_keywords");
    }

    #[test]
    fn test_additional_requirement_needs_both_conditions() {
        // Enough keywords, but the target is not 1.5 times longer.
        let source = requirement("Access control policy with audit.");
        let target = requirement("Access control policy with audit review.");
        let analysis =
            analysis_with_keywords(&[], &["privacy", "sensitive", "confidential", "classification", "retention", "disposal"]);
        assert!(additional_requirement(&analysis, &source, &target).is_none());

        // Long enough, but only five target-only keywords.
        let (source, target) = long_target_pair();
        let analysis = analysis_with_keywords(
            &[],
            &["privacy", "sensitive", "confidential", "classification", "retention"],
        );
        assert!(additional_requirement(&analysis, &source, &target).is_none());
        println!("[PASS] test_additional_requirement_needs_both_conditions");
    }

    // === evidence_gap ===

    #[test]
    fn test_evidence_gap_fires_on_stored_contradiction() {
        let mapping = MappingState::default().with_stored_metrics(81, 0.6);
        let gap = evidence_gap(&mapping).unwrap();

        assert_eq!(gap.gap_type, GapType::EvidenceGap);
        assert_eq!(gap.priority, Priority::Medium);
        assert_eq!(gap.percentage_impact, 10);
        assert_eq!(gap.confidence, 70);
        assert_eq!(gap.estimated_effort, Some(3));
        println!("[PASS] test_evidence_gap_fires_on_stored_contradiction");
    }

    #[test]
    fn test_evidence_gap_bounds_are_strict() {
        assert!(evidence_gap(&MappingState::default().with_stored_metrics(80, 0.6)).is_none());
        assert!(evidence_gap(&MappingState::default().with_stored_metrics(85, 0.5)).is_none());
        assert!(evidence_gap(&MappingState::default().with_stored_metrics(85, 0.7)).is_none());
        println!("[PASS] test_evidence_gap_bounds_are_strict");
    }

    #[test]
    fn test_evidence_gap_needs_stored_metrics() {
        assert!(evidence_gap(&MappingState::default()).is_none());
        println!("[PASS] test_evidence_gap_needs_stored_metrics");
    }
}
