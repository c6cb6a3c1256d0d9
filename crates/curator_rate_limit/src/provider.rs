//! Per-provider default rate limits.
//!
//! Candidates frequently arrive with partial or missing ceilings. Unset
//! ceilings fall back to the provider's defaults, and providers without an
//! entry fall back to `default`.

use curator_core::{Candidate, RateLimits};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Default rate limits per provider.
///
/// # Example
///
/// ```toml
/// [rate_limits.default]
/// rpm = 20
/// rpd = 1_000
///
/// [rate_limits.providers.groq]
/// rpm = 30
/// rpd = 14_400
/// tpm = 6_000
/// tpd = 500_000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderLimitsConfig {
    /// Limits for providers without their own entry
    #[serde(default = "fallback_limits")]
    pub default: RateLimits,

    /// Map of provider tag to default limits
    #[serde(default)]
    pub providers: HashMap<String, RateLimits>,
}

fn fallback_limits() -> RateLimits {
    RateLimits {
        rpm: Some(20),
        rpd: Some(1_000),
        tpm: None,
        tpd: None,
    }
}

impl Default for ProviderLimitsConfig {
    fn default() -> Self {
        Self {
            default: fallback_limits(),
            providers: HashMap::new(),
        }
    }
}

impl ProviderLimitsConfig {
    /// Default limits for a provider tag (case-insensitive).
    pub fn limits_for(&self, provider: &str) -> RateLimits {
        match self.providers.get(&provider.to_lowercase()) {
            Some(limits) => limits.or(&self.default),
            None => {
                debug!(provider, "No provider defaults configured, using fallback limits");
                self.default
            }
        }
    }

    /// Lowercase provider tags so lookups match however the file spelled them.
    ///
    /// A mixed-case entry replaces the lowercase entry it collides with, since
    /// bundled tags are already lowercase and the mixed-case spelling can only
    /// come from a user file.
    pub fn normalize_keys(&mut self) {
        let providers = std::mem::take(&mut self.providers);
        let (lower, mixed): (Vec<_>, Vec<_>) = providers
            .into_iter()
            .partition(|(tag, _)| *tag == tag.to_lowercase());
        for (tag, limits) in lower.into_iter().chain(mixed) {
            self.providers.insert(tag.to_lowercase(), limits);
        }
    }

    /// Effective limits for a candidate: its own ceilings over provider defaults.
    ///
    /// ```
    /// use curator_core::{Candidate, RateLimits};
    /// use curator_rate_limit::ProviderLimitsConfig;
    ///
    /// let mut config = ProviderLimitsConfig::default();
    /// config.providers.insert(
    ///     "groq".to_string(),
    ///     RateLimits { rpm: Some(30), tpm: Some(6_000), ..Default::default() },
    /// );
    ///
    /// let candidate = Candidate::builder()
    ///     .id("llama-3.1-8b-instant")
    ///     .provider("groq")
    ///     .rate_limits(RateLimits { rpm: Some(10), ..Default::default() })
    ///     .build()
    ///     .unwrap();
    ///
    /// let limits = config.resolve(&candidate);
    /// assert_eq!(limits.rpm, Some(10));
    /// assert_eq!(limits.tpm, Some(6_000));
    /// assert_eq!(limits.rpd, Some(1_000));
    /// ```
    pub fn resolve(&self, candidate: &Candidate) -> RateLimits {
        candidate
            .rate_limits()
            .or(&self.limits_for(candidate.provider()))
    }
}
