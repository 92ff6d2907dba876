//! Similarity metrics: textual (token-level) and structural (metadata).

pub mod structural;
pub mod textual;

pub use structural::{
    CATEGORY_WEIGHT, LINKED_CONTROL_SATURATION, LINKED_CONTROL_WEIGHT, NEUTRAL_SCORE,
    PRIORITY_WEIGHT, RELATED_CATEGORY_GROUPS, categories_match, priority_alignment,
    structural_similarity,
};
pub use textual::{COSINE_WEIGHT, JACCARD_WEIGHT, cosine, jaccard, textual_similarity};
