//! Per-candidate sliding-window usage accounting.

use chrono::{DateTime, Duration, Utc};
use curator_core::{RateLimits, RateMetric};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use derive_getters::Getters;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Events older than this many hours are purged by cleanup.
pub const RETENTION_HORIZON_HOURS: i64 = 24;

/// A timestamped usage observation.
///
/// Request events carry an amount of 1; token events carry the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEvent {
    /// When the usage happened
    pub at: DateTime<Utc>,
    /// Requests or tokens consumed
    pub amount: u64,
}

/// Windowed usage for a candidate at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct UsageSnapshot {
    requests_per_minute: u64,
    requests_per_day: u64,
    tokens_per_minute: u64,
    tokens_per_day: u64,
}

impl UsageSnapshot {
    /// Usage counted against a single metric.
    pub fn get(&self, metric: RateMetric) -> u64 {
        match metric {
            RateMetric::RequestsPerMinute => self.requests_per_minute,
            RateMetric::RequestsPerDay => self.requests_per_day,
            RateMetric::TokensPerMinute => self.tokens_per_minute,
            RateMetric::TokensPerDay => self.tokens_per_day,
        }
    }
}

#[derive(Debug)]
struct CandidateLog {
    limits: RateLimits,
    requests: VecDeque<UsageEvent>,
    tokens: VecDeque<UsageEvent>,
}

impl CandidateLog {
    fn new(limits: RateLimits) -> Self {
        Self {
            limits,
            requests: VecDeque::new(),
            tokens: VecDeque::new(),
        }
    }

    fn usage(&self, metric: RateMetric, now: DateTime<Utc>) -> u64 {
        let since = now - metric.window();
        let stream = if metric.is_token_metric() {
            &self.tokens
        } else {
            &self.requests
        };
        stream
            .iter()
            .filter(|e| e.at > since && e.at <= now)
            .map(|e| e.amount)
            .sum()
    }

    fn headroom(&self, metric: RateMetric, now: DateTime<Utc>) -> f64 {
        let Some(ceiling) = self.limits.ceiling(metric) else {
            return 1.0;
        };
        if ceiling == 0 {
            return 0.0;
        }
        let used = self.usage(metric, now);
        let remaining = ceiling.saturating_sub(used) as f64;
        (remaining / ceiling as f64).clamp(0.0, 1.0)
    }

    fn prune(&mut self, cutoff: DateTime<Utc>) -> usize {
        let before = self.requests.len() + self.tokens.len();
        self.requests.retain(|e| e.at >= cutoff);
        self.tokens.retain(|e| e.at >= cutoff);
        before - (self.requests.len() + self.tokens.len())
    }

    fn clear(&mut self) {
        self.requests.clear();
        self.tokens.clear();
    }
}

/// Shared, thread-safe usage tracker.
///
/// Candidates are registered with [`initialize`](Self::initialize) or on
/// their first [`record`](Self::record). Lookups for unknown candidates are
/// optimistic and never fail.
///
/// ```
/// use curator_core::{RateLimits, RateMetric};
/// use curator_rate_limit::UsageTracker;
///
/// let tracker = UsageTracker::new();
/// tracker.initialize("m1", RateLimits { rpm: Some(2), ..Default::default() });
/// tracker.record("m1", 10);
/// assert_eq!(tracker.headroom("m1", RateMetric::RequestsPerMinute), 0.5);
/// assert_eq!(tracker.headroom("m1", RateMetric::TokensPerMinute), 1.0);
/// ```
#[derive(Debug, Default)]
pub struct UsageTracker {
    logs: DashMap<String, Arc<Mutex<CandidateLog>>>,
    fallback_limits: RateLimits,
}

impl UsageTracker {
    /// Tracker whose auto-initialized candidates are unbounded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker that registers unknown candidates with `limits` on first record.
    pub fn with_fallback_limits(limits: RateLimits) -> Self {
        Self {
            logs: DashMap::new(),
            fallback_limits: limits,
        }
    }

    /// Limits applied to candidates first seen through `record`.
    pub fn fallback_limits(&self) -> RateLimits {
        self.fallback_limits
    }

    fn log(&self, candidate_id: &str) -> Option<Arc<Mutex<CandidateLog>>> {
        self.logs.get(candidate_id).map(|entry| Arc::clone(entry.value()))
    }

    fn log_or_init(&self, candidate_id: &str, limits: RateLimits) -> Arc<Mutex<CandidateLog>> {
        if let Some(log) = self.log(candidate_id) {
            return log;
        }
        let entry = self
            .logs
            .entry(candidate_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(CandidateLog::new(limits))));
        Arc::clone(entry.value())
    }

    /// Register ceilings for a candidate. The first registration wins.
    ///
    /// Returns `true` when this call registered the candidate, `false` when
    /// it was already known and `limits` were ignored.
    #[instrument(skip(self, limits))]
    pub fn initialize(&self, candidate_id: &str, limits: RateLimits) -> bool {
        match self.logs.entry(candidate_id.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(CandidateLog::new(limits))));
                debug!(?limits, "Registered candidate limits");
                true
            }
        }
    }

    /// Limits registered for a candidate, if any.
    pub fn limits(&self, candidate_id: &str) -> Option<RateLimits> {
        self.log(candidate_id).map(|log| log.lock().limits)
    }

    /// True when the candidate has been registered or recorded.
    pub fn is_tracked(&self, candidate_id: &str) -> bool {
        self.logs.contains_key(candidate_id)
    }

    /// Number of tracked candidates.
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    /// True when no candidate is tracked.
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// Record one request and its estimated token count now.
    pub fn record(&self, candidate_id: &str, estimated_tokens: u64) {
        self.record_at(candidate_id, estimated_tokens, Utc::now());
    }

    /// Record one request and its estimated token count at `at`.
    #[instrument(skip(self))]
    pub fn record_at(&self, candidate_id: &str, estimated_tokens: u64, at: DateTime<Utc>) {
        if !self.is_tracked(candidate_id) {
            debug!("Auto-initializing unknown candidate with fallback limits");
        }
        let log = self.log_or_init(candidate_id, self.fallback_limits);
        let mut log = log.lock();
        log.requests.push_back(UsageEvent { at, amount: 1 });
        log.tokens.push_back(UsageEvent {
            at,
            amount: estimated_tokens,
        });
    }

    /// Headroom for one metric now.
    pub fn headroom(&self, candidate_id: &str, metric: RateMetric) -> f64 {
        self.headroom_at(candidate_id, metric, Utc::now())
    }

    /// Headroom for one metric at `now`, in `[0, 1]`.
    pub fn headroom_at(&self, candidate_id: &str, metric: RateMetric, now: DateTime<Utc>) -> f64 {
        match self.log(candidate_id) {
            Some(log) => log.lock().headroom(metric, now),
            None => 1.0,
        }
    }

    /// Minimum headroom across the four metrics now.
    pub fn overall_headroom(&self, candidate_id: &str) -> f64 {
        self.overall_headroom_at(candidate_id, Utc::now())
    }

    /// Minimum headroom across the four metrics at `now`.
    pub fn overall_headroom_at(&self, candidate_id: &str, now: DateTime<Utc>) -> f64 {
        let Some(log) = self.log(candidate_id) else {
            return 1.0;
        };
        let log = log.lock();
        RateMetric::iter()
            .map(|metric| log.headroom(metric, now))
            .fold(1.0, f64::min)
    }

    /// Windowed usage for a candidate now.
    pub fn usage(&self, candidate_id: &str) -> UsageSnapshot {
        self.usage_at(candidate_id, Utc::now())
    }

    /// Windowed usage for a candidate at `now`.
    pub fn usage_at(&self, candidate_id: &str, now: DateTime<Utc>) -> UsageSnapshot {
        let Some(log) = self.log(candidate_id) else {
            return UsageSnapshot::default();
        };
        let log = log.lock();
        UsageSnapshot {
            requests_per_minute: log.usage(RateMetric::RequestsPerMinute, now),
            requests_per_day: log.usage(RateMetric::RequestsPerDay, now),
            tokens_per_minute: log.usage(RateMetric::TokensPerMinute, now),
            tokens_per_day: log.usage(RateMetric::TokensPerDay, now),
        }
    }

    /// Purge events older than the retention horizon. Returns events removed.
    pub fn cleanup(&self) -> usize {
        self.cleanup_at(Utc::now())
    }

    /// Purge events older than the retention horizon relative to `now`.
    #[instrument(skip(self))]
    pub fn cleanup_at(&self, now: DateTime<Utc>) -> usize {
        let cutoff = now - Duration::hours(RETENTION_HORIZON_HOURS);
        let logs: Vec<_> = self.logs.iter().map(|e| Arc::clone(e.value())).collect();
        let removed: usize = logs.iter().map(|log| log.lock().prune(cutoff)).sum();
        if removed > 0 {
            info!(removed, candidates = logs.len(), "Purged expired usage events");
        }
        removed
    }

    /// Clear a candidate's events, keeping its limits.
    pub fn reset(&self, candidate_id: &str) {
        if let Some(log) = self.log(candidate_id) {
            log.lock().clear();
            debug!(candidate_id, "Reset usage");
        }
    }

    /// Clear every candidate's events, keeping limits.
    pub fn reset_all(&self) {
        for entry in self.logs.iter() {
            entry.value().lock().clear();
        }
        debug!(candidates = self.logs.len(), "Reset all usage");
    }
}
