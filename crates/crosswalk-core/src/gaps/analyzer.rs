//! Gap analyzer service.

use tracing::debug;

use crate::gaps::rules;
use crate::types::analysis::AnalysisResult;
use crate::types::gap::GapItem;
use crate::types::mapping::MappingState;
use crate::types::requirement::Requirement;

/// Derives gap items from the quality analysis of one mapping.
///
/// Stateless like [`QualityAnalyzer`]; the rules run in a fixed order, so
/// identical inputs always produce the same gap list.
///
/// [`QualityAnalyzer`]: crate::analysis::QualityAnalyzer
#[derive(Debug, Clone, Default)]
pub struct GapAnalyzer;

impl GapAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate every gap rule against one analyzed mapping.
    ///
    /// Returns between zero and five gaps, in rule order: missing control,
    /// partial coverage, scope difference, additional requirement,
    /// evidence gap.
    pub fn analyze(
        &self,
        analysis: &AnalysisResult,
        source: &Requirement,
        target: &Requirement,
        mapping: &MappingState,
    ) -> Vec<GapItem> {
        let gaps: Vec<GapItem> = [
            rules::missing_control(analysis),
            rules::partial_coverage(analysis),
            rules::scope_difference(analysis, source, target),
            rules::additional_requirement(analysis, source, target),
            rules::evidence_gap(mapping),
        ]
        .into_iter()
        .flatten()
        .collect();

        debug!(gaps = gaps.len(), "Gap analysis complete");
        gaps
    }
}
