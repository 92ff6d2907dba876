//! Aggregate statistics over the gaps of one mapping.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::gap::{GapItem, GapType};
use crate::types::requirement::Priority;

/// Gap confidence at or above this counts as high confidence.
pub const HIGH_CONFIDENCE_THRESHOLD: u32 = 80;

/// Gap confidence at or above this counts as medium confidence.
pub const MEDIUM_CONFIDENCE_THRESHOLD: u32 = 60;

/// Aggregated view over the gap items of one mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapSummary {
    pub total_gaps: usize,

    /// Gap count per gap type; types with no gaps are absent.
    pub by_type: HashMap<GapType, usize>,

    /// Gap count per priority; priorities with no gaps are absent.
    pub by_priority: HashMap<Priority, usize>,

    /// Sum of percentage impacts, capped at 100.
    pub total_impact: u32,

    /// Sum of estimated efforts in hours. Gaps without an estimate
    /// contribute nothing.
    pub total_effort: u32,

    /// Gaps with confidence at or above [`HIGH_CONFIDENCE_THRESHOLD`].
    pub high_confidence_gaps: usize,
}

/// Total mapping-percentage impact of the given gaps, capped at 100.
pub fn total_gap_impact(gaps: &[GapItem]) -> u32 {
    gaps.iter()
        .map(|gap| gap.percentage_impact)
        .sum::<u32>()
        .min(100)
}

/// Summarize the gaps of one mapping.
pub fn summarize(gaps: &[GapItem]) -> GapSummary {
    let mut summary = GapSummary {
        total_gaps: gaps.len(),
        total_impact: total_gap_impact(gaps),
        ..Default::default()
    };

    for gap in gaps {
        *summary.by_type.entry(gap.gap_type).or_insert(0) += 1;
        *summary.by_priority.entry(gap.priority).or_insert(0) += 1;
        summary.total_effort += gap.estimated_effort.unwrap_or(0);
        if gap.confidence >= HIGH_CONFIDENCE_THRESHOLD {
            summary.high_confidence_gaps += 1;
        }
    }

    summary
}
