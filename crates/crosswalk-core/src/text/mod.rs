//! Text pipeline: normalization, tokenization, keyword extraction.

pub mod keywords;
pub mod normalize;

pub use keywords::{
    CATEGORY_BONUS_WEIGHT, KEYWORD_TABLE, KeywordCategory, categories_of, category_alignment,
    extract_keywords, keyword_overlap,
};
pub use normalize::{MIN_TOKEN_LEN, STOPWORDS, normalize, tokenize};
