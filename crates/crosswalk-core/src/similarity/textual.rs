//! Token-level textual similarity.
//!
//! Two complementary views of the same token streams: Jaccard ignores
//! frequency and asks how much vocabulary the texts share; cosine weighs
//! repeated terms. The combined score leans on cosine.

use std::collections::{HashMap, HashSet};

/// Weight of the Jaccard component in [`textual_similarity`].
pub const JACCARD_WEIGHT: f64 = 0.4;

/// Weight of the cosine component in [`textual_similarity`].
pub const COSINE_WEIGHT: f64 = 0.6;

/// Jaccard similarity over the token sets.
///
/// Two empty texts are trivially identical: 1.0. Exactly one empty side
/// shares nothing: 0.0. Duplicate tokens do not change the result.
pub fn jaccard(a: &[&str], b: &[&str]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<&str> = a.iter().copied().collect();
    let set_b: HashSet<&str> = b.iter().copied().collect();
    let intersection = set_a.intersection(&set_b).count() as f64;
    let union = set_a.union(&set_b).count() as f64;
    intersection / union
}

/// Cosine similarity over term-frequency vectors on the shared vocabulary.
///
/// Duplicate tokens raise the term weight. Either side empty, or a
/// zero-magnitude vector, yields 0.0 rather than dividing by zero.
pub fn cosine(a: &[&str], b: &[&str]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let mut frequencies: HashMap<&str, (f64, f64)> = HashMap::new();
    for &token in a {
        frequencies.entry(token).or_default().0 += 1.0;
    }
    for &token in b {
        frequencies.entry(token).or_default().1 += 1.0;
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (freq_a, freq_b) in frequencies.values() {
        dot += freq_a * freq_b;
        norm_a += freq_a * freq_a;
        norm_b += freq_b * freq_b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Combined textual similarity of two token sequences,
/// `0.4 * jaccard + 0.6 * cosine`.
pub fn textual_similarity(a: &[&str], b: &[&str]) -> f64 {
    JACCARD_WEIGHT * jaccard(a, b) + COSINE_WEIGHT * cosine(a, b)
}
