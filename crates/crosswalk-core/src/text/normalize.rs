//! Text normalization and tokenization.
//!
//! Everything downstream (keyword extraction, similarity) operates on the
//! output of [`normalize`]: lowercase, alphanumerics only, single spaces.

/// Shortest token [`tokenize`] keeps. Shorter fragments carry no signal.
pub const MIN_TOKEN_LEN: usize = 3;

/// Function words dropped during tokenization.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "may", "might", "must", "can", "shall",
];

/// Normalize raw requirement text for matching.
///
/// Lowercases, replaces every character outside `a-z0-9` with a space,
/// collapses whitespace runs to single spaces, and trims. Empty input
/// yields an empty string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into analysis tokens.
///
/// Splits on spaces, then drops tokens shorter than [`MIN_TOKEN_LEN`] and
/// the [`STOPWORDS`]. Duplicates survive on purpose: term frequency feeds
/// the cosine similarity.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized
        .split_whitespace()
        .filter(|word| word.len() >= MIN_TOKEN_LEN && !STOPWORDS.contains(word))
        .collect()
}
