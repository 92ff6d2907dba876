//! Result types for mapping quality analysis.

use serde::{Deserialize, Serialize};

use crate::analysis::scoring::ALGORITHM_VERSION;

/// Keywords extracted from the two sides of a mapping.
///
/// Each list is deduplicated and ordered by the keyword dictionary, so the
/// same pair of texts always produces the same sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedKeywords {
    /// Keywords found in the source requirement text.
    pub source: Vec<String>,

    /// Keywords found in the target requirement text.
    pub target: Vec<String>,
}

impl ExtractedKeywords {
    pub fn new(source: Vec<String>, target: Vec<String>) -> Self {
        Self { source, target }
    }

    /// Target-side keywords the source does not cover, in target order.
    pub fn missing_in_source(&self) -> Vec<String> {
        self.target
            .iter()
            .filter(|kw| !self.source.contains(kw))
            .cloned()
            .collect()
    }
}

/// Complete scoring output for one source/target requirement pair.
///
/// Produced by [`QualityAnalyzer::analyze`] and consumed by the gap rule
/// engine and by the surrounding persistence layer. Immutable by
/// convention: re-analysis produces a fresh record.
///
/// [`QualityAnalyzer::analyze`]: crate::analysis::QualityAnalyzer::analyze
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Combined mapping strength on the 0-150 scale. Modifiers can push a
    /// strong mapping past 100.
    pub calculated_percentage: u32,

    /// Keyword-set overlap with category-alignment bonus, [0.0, 1.0],
    /// rounded to 4 decimals.
    pub keyword_overlap: f64,

    /// Weighted Jaccard/cosine similarity of the normalized texts,
    /// [0.0, 1.0], rounded to 4 decimals.
    pub textual_similarity: f64,

    /// Metadata similarity (category, priority, linked controls),
    /// [0.0, 1.0], rounded to 4 decimals.
    pub structural_similarity: f64,

    /// Self-assessed reliability of the similarity judgment, 0-100.
    /// Measures metric agreement and text volume, not compliance strength.
    pub confidence: u32,

    /// Overall mapping quality, 0-100, including the verification bonus.
    pub quality_score: u32,

    /// True when confidence falls below the review threshold.
    pub requires_review: bool,

    /// Keywords found on each side.
    pub extracted_keywords: ExtractedKeywords,

    /// Version tag of the scoring algorithm that produced this result.
    pub algorithm_version: String,
}

impl AnalysisResult {
    /// Result with no recognized overlap anywhere. Starting point for the
    /// builder methods.
    pub fn zero() -> Self {
        Self {
            calculated_percentage: 0,
            keyword_overlap: 0.0,
            textual_similarity: 0.0,
            structural_similarity: 0.0,
            confidence: 0,
            quality_score: 0,
            requires_review: true,
            extracted_keywords: ExtractedKeywords::default(),
            algorithm_version: ALGORITHM_VERSION.to_string(),
        }
    }

    /// Builder pattern: set the calculated percentage.
    pub fn with_percentage(mut self, percentage: u32) -> Self {
        self.calculated_percentage = percentage;
        self
    }

    /// Builder pattern: set the keyword overlap score.
    pub fn with_keyword_overlap(mut self, overlap: f64) -> Self {
        self.keyword_overlap = overlap;
        self
    }

    /// Builder pattern: set the textual similarity.
    pub fn with_textual_similarity(mut self, similarity: f64) -> Self {
        self.textual_similarity = similarity;
        self
    }

    /// Builder pattern: set the structural similarity.
    pub fn with_structural_similarity(mut self, similarity: f64) -> Self {
        self.structural_similarity = similarity;
        self
    }

    /// Builder pattern: set confidence and the derived review flag.
    pub fn with_confidence(mut self, confidence: u32) -> Self {
        self.confidence = confidence;
        self.requires_review = confidence < crate::analysis::scoring::REVIEW_CONFIDENCE_THRESHOLD;
        self
    }

    /// Builder pattern: set the quality score.
    pub fn with_quality_score(mut self, quality: u32) -> Self {
        self.quality_score = quality;
        self
    }

    /// Builder pattern: set the extracted keywords.
    pub fn with_keywords(mut self, keywords: ExtractedKeywords) -> Self {
        self.extracted_keywords = keywords;
        self
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::zero()
    }
}
