//! Parameter-count fallback for candidates without a benchmark index.
//!
//! Model names usually carry their size ("llama-3.1-70b", "mixtral-8x7b").
//! The heuristic maps that size onto coarse quality buckets. It is
//! intentionally imprecise and only used when no benchmark data exists.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Quality assumed when no parameter count can be parsed.
pub const NEUTRAL_QUALITY: f64 = 0.6;

/// (minimum billions of parameters, quality), largest first.
const BUCKETS: [(f64, f64); 7] = [
    (400.0, 1.0),
    (100.0, 0.95),
    (65.0, 0.9),
    (27.0, 0.7),
    (8.0, 0.5),
    (4.0, 0.4),
    (2.0, 0.35),
];

/// Quality for any parsed size below the smallest bucket.
const FLOOR_QUALITY: f64 = 0.3;

static PARAMETER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:(\d+)x)?(\d+(?:\.\d+)?)b\b").expect("Valid parameter-count regex")
});

/// Parameter count in billions parsed from a model name.
///
/// Mixture-of-experts names like `8x7b` yield the total (56).
///
/// ```
/// use curator_selection::parameter_count;
///
/// assert_eq!(parameter_count("llama-3.1-70b-versatile"), Some(70.0));
/// assert_eq!(parameter_count("mixtral-8x7b-32768"), Some(56.0));
/// assert_eq!(parameter_count("Qwen2.5 1.5B Instruct"), Some(1.5));
/// assert_eq!(parameter_count("gpt-4o"), None);
/// ```
pub fn parameter_count(name: &str) -> Option<f64> {
    let captures = PARAMETER_TOKEN.captures(name)?;
    let size: f64 = captures.get(2)?.as_str().parse().ok()?;
    let experts: f64 = match captures.get(1) {
        Some(m) => m.as_str().parse().ok()?,
        None => 1.0,
    };
    Some(experts * size)
}

/// Quality estimate from a display name.
pub fn heuristic_quality(name: &str) -> f64 {
    let Some(billions) = parameter_count(name) else {
        debug!(name, "No parameter count in name, using neutral quality");
        return NEUTRAL_QUALITY;
    };
    BUCKETS
        .iter()
        .find(|(min, _)| billions >= *min)
        .map(|(_, quality)| *quality)
        .unwrap_or(FLOOR_QUALITY)
}
