//! Heuristic token estimation.
//!
//! This is deliberately not a tokenizer: the tracker only needs an
//! approximate token count to drive headroom.

/// Estimated tokens per character of query text.
pub const TOKENS_PER_CHAR: f64 = 0.75;

/// Estimate the token count of a query as `ceil(chars * 0.75)`.
///
/// ```
/// use curator_core::estimate_tokens;
///
/// assert_eq!(estimate_tokens(""), 0);
/// assert_eq!(estimate_tokens("abcd"), 3);
/// assert_eq!(estimate_tokens("abcde"), 4);
/// ```
pub fn estimate_tokens(query_text: &str) -> u64 {
    let length = query_text.chars().count() as f64;
    (length * TOKENS_PER_CHAR).ceil() as u64
}
