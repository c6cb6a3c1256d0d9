//! Rate limit ceilings and the metrics they apply to.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// One of the four independently tracked rate metrics.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum RateMetric {
    /// Requests in the trailing minute.
    #[display("requests-per-minute")]
    RequestsPerMinute,
    /// Requests in the trailing 24 hours.
    #[display("requests-per-day")]
    RequestsPerDay,
    /// Estimated tokens in the trailing minute.
    #[display("tokens-per-minute")]
    TokensPerMinute,
    /// Estimated tokens in the trailing 24 hours.
    #[display("tokens-per-day")]
    TokensPerDay,
}

impl RateMetric {
    /// Length of the sliding window this metric is counted over.
    pub fn window(&self) -> Duration {
        match self {
            RateMetric::RequestsPerMinute | RateMetric::TokensPerMinute => Duration::seconds(60),
            RateMetric::RequestsPerDay | RateMetric::TokensPerDay => Duration::hours(24),
        }
    }

    /// Whether this metric sums token counts rather than counting requests.
    pub fn is_token_metric(&self) -> bool {
        matches!(self, RateMetric::TokensPerMinute | RateMetric::TokensPerDay)
    }
}

/// Per-candidate ceilings for the four rate metrics.
///
/// `None` means unbounded for that metric.
///
/// # Example
///
/// ```toml
/// [providers.groq.limits]
/// rpm = 30
/// rpd = 14_400
/// tpm = 6_000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RateLimits {
    /// Requests per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpm: Option<u64>,

    /// Requests per day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpd: Option<u64>,

    /// Tokens per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tpm: Option<u64>,

    /// Tokens per day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tpd: Option<u64>,
}

impl RateLimits {
    /// Limits with every metric unbounded.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Ceiling for a single metric.
    pub fn ceiling(&self, metric: RateMetric) -> Option<u64> {
        match metric {
            RateMetric::RequestsPerMinute => self.rpm,
            RateMetric::RequestsPerDay => self.rpd,
            RateMetric::TokensPerMinute => self.tpm,
            RateMetric::TokensPerDay => self.tpd,
        }
    }

    /// True when no metric has a ceiling.
    pub fn is_unbounded(&self) -> bool {
        self.rpm.is_none() && self.rpd.is_none() && self.tpm.is_none() && self.tpd.is_none()
    }

    /// Fill unset ceilings from `defaults`; ceilings already set win.
    ///
    /// ```
    /// use curator_core::RateLimits;
    ///
    /// let own = RateLimits { rpm: Some(10), ..Default::default() };
    /// let defaults = RateLimits { rpm: Some(30), rpd: Some(1_000), ..Default::default() };
    /// let merged = own.or(&defaults);
    /// assert_eq!(merged.rpm, Some(10));
    /// assert_eq!(merged.rpd, Some(1_000));
    /// assert_eq!(merged.tpm, None);
    /// ```
    pub fn or(&self, defaults: &RateLimits) -> RateLimits {
        RateLimits {
            rpm: self.rpm.or(defaults.rpm),
            rpd: self.rpd.or(defaults.rpd),
            tpm: self.tpm.or(defaults.tpm),
            tpd: self.tpd.or(defaults.tpd),
        }
    }
}
