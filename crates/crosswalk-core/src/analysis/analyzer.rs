//! Mapping quality analyzer service.

use tracing::debug;

use crate::analysis::scoring::{
    ALGORITHM_VERSION, REVIEW_CONFIDENCE_THRESHOLD, combined_percentage, confidence_score,
    quality_score, round_similarity,
};
use crate::similarity::structural::structural_similarity;
use crate::similarity::textual::textual_similarity;
use crate::text::keywords::{extract_keywords, keyword_overlap};
use crate::text::normalize::{normalize, tokenize};
use crate::types::analysis::{AnalysisResult, ExtractedKeywords};
use crate::types::mapping::MappingState;
use crate::types::requirement::Requirement;

/// Scores how well a source requirement covers a target requirement.
///
/// Stateless and synchronous: identical inputs always produce identical
/// results, and any number of analyses may run concurrently without
/// coordination. Callers may memoize results keyed by a hash of the
/// inputs; the analyzer itself keeps nothing.
#[derive(Debug, Clone, Default)]
pub struct QualityAnalyzer;

impl QualityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze one mapping: similarity metrics, combined percentage,
    /// confidence, quality score, and the review flag.
    ///
    /// The similarities on the returned record are rounded to 4 decimals;
    /// the unrounded values feed the percentage and confidence formulas.
    pub fn analyze(
        &self,
        source: &Requirement,
        target: &Requirement,
        mapping: &MappingState,
    ) -> AnalysisResult {
        let source_normalized = normalize(source.text.as_str());
        let target_normalized = normalize(target.text.as_str());

        let source_tokens = tokenize(&source_normalized);
        let target_tokens = tokenize(&target_normalized);

        let source_keywords = extract_keywords(&source_normalized);
        let target_keywords = extract_keywords(&target_normalized);

        let textual = textual_similarity(&source_tokens, &target_tokens);
        let keyword = keyword_overlap(&source_keywords, &target_keywords);
        let structural = structural_similarity(&source.meta, &target.meta);

        let calculated_percentage =
            combined_percentage(keyword, textual, structural, &source.meta, &target.meta);
        let confidence = confidence_score(
            keyword,
            textual,
            structural,
            source_tokens.len(),
            target_tokens.len(),
        );
        let quality = quality_score(confidence, calculated_percentage, mapping.verification);

        debug!(
            percentage = calculated_percentage,
            confidence,
            quality,
            source_keywords = source_keywords.len(),
            target_keywords = target_keywords.len(),
            "Mapping quality analysis complete"
        );

        AnalysisResult {
            calculated_percentage,
            keyword_overlap: round_similarity(keyword),
            textual_similarity: round_similarity(textual),
            structural_similarity: round_similarity(structural),
            confidence,
            quality_score: quality,
            requires_review: confidence < REVIEW_CONFIDENCE_THRESHOLD,
            extracted_keywords: ExtractedKeywords {
                source: source_keywords.iter().map(|kw| kw.to_string()).collect(),
                target: target_keywords.iter().map(|kw| kw.to_string()).collect(),
            },
            algorithm_version: ALGORITHM_VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::mapping::VerificationState;
    use crate::types::requirement::RequirementMeta;

    fn requirement(text: &str, framework: &str) -> Requirement {
        Requirement::new(text, RequirementMeta::new(framework))
    }

    // === full pipeline ===

    #[test]
    fn test_analyze_access_control_pair() {
        let analyzer = QualityAnalyzer::new();
        let source = requirement("Access control policy requires authentication.", "ISO27001");
        let target = requirement(
            "Access control policy requires authentication and encryption of data at rest.",
            "GDPR",
        );

        let result = analyzer.analyze(&source, &target, &MappingState::default());

        assert_eq!(
            result.extracted_keywords.source,
            vec!["access", "authentication", "policy"]
        );
        assert_eq!(
            result.extracted_keywords.target,
            vec!["access", "authentication", "encryption", "policy"]
        );

        // Keyword overlap: 3/4 plus category bonus 2/3 * 0.2.
        assert!((result.keyword_overlap - 0.8833).abs() < 1e-9);
        // Jaccard 5/8, cosine 5/sqrt(40), weighted 0.4/0.6.
        assert!((result.textual_similarity - 0.7243).abs() < 1e-9);
        // No metadata factors on either side.
        assert_eq!(result.structural_similarity, 0.5);

        assert_eq!(result.calculated_percentage, 73);
        assert_eq!(result.confidence, 80);
        assert_eq!(result.quality_score, 54);
        assert!(!result.requires_review);
        assert_eq!(result.algorithm_version, ALGORITHM_VERSION);
        println!("[PASS] test_analyze_access_control_pair");
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let analyzer = QualityAnalyzer::new();
        let source = requirement("Backup and disaster recovery procedures.", "ISO27001");
        let target = requirement("Data backup, replication and restore testing.", "DORA");
        let mapping = MappingState::new(VerificationState::Reviewed);

        let first = analyzer.analyze(&source, &target, &mapping);
        let second = analyzer.analyze(&source, &target, &mapping);
        assert_eq!(first, second);
        println!("[PASS] test_analyze_is_idempotent");
    }

    #[test]
    fn test_analyze_empty_texts() {
        let analyzer = QualityAnalyzer::new();
        let source = requirement("", "SOC2");
        let target = requirement("", "GDPR");

        let result = analyzer.analyze(&source, &target, &MappingState::default());

        // No keywords on either side: overlap 0. Both token sets empty:
        // textual = Jaccard component alone.
        assert_eq!(result.keyword_overlap, 0.0);
        assert_eq!(result.textual_similarity, 0.4);
        assert_eq!(result.structural_similarity, 0.5);
        assert!(result.extracted_keywords.source.is_empty());
        assert!(result.extracted_keywords.target.is_empty());

        // 0.4 * 0.35 + 0.5 * 0.25 = 26.5 -> 27.
        assert_eq!(result.calculated_percentage, 27);
        println!("[PASS] test_analyze_empty_texts");
    }

    #[test]
    fn test_analyze_verification_raises_quality_only() {
        let analyzer = QualityAnalyzer::new();
        let source = requirement("Incident response and breach notification.", "NIS2");
        let target = requirement("Incident response plan with breach reporting.", "GDPR");

        let unverified =
            analyzer.analyze(&source, &target, &MappingState::new(VerificationState::Unverified));
        let verified =
            analyzer.analyze(&source, &target, &MappingState::new(VerificationState::Verified));

        assert_eq!(
            unverified.calculated_percentage,
            verified.calculated_percentage
        );
        assert_eq!(unverified.confidence, verified.confidence);
        assert_eq!(verified.quality_score, unverified.quality_score + 30);
        println!("[PASS] test_analyze_verification_raises_quality_only");
    }

    #[test]
    fn test_analyze_identical_requirements() {
        let analyzer = QualityAnalyzer::new();
        let text = "Encryption of personal data in transit and at rest using TLS.";
        let source = requirement(text, "GDPR");
        let target = requirement(text, "NIS2");

        let result = analyzer.analyze(&source, &target, &MappingState::default());

        // Identical texts: full keyword overlap and textual similarity.
        assert_eq!(result.keyword_overlap, 1.0);
        assert_eq!(result.textual_similarity, 1.0);
        // 1.0 * 0.40 + 1.0 * 0.35 + 0.5 * 0.25 = 87.5 + EU bonus 5 -> 93.
        assert_eq!(result.calculated_percentage, 93);
        println!("[PASS] test_analyze_identical_requirements");
    }
}
