//! Integration tests for sliding-window usage tracking.

use chrono::{Duration, Utc};
use curator_core::{RateLimits, RateMetric};
use curator_rate_limit::{UsageTracker, spawn_cleanup_task};
use std::sync::Arc;
use std::thread;

const EPS: f64 = 1e-9;

fn rpm(limit: u64) -> RateLimits {
    RateLimits {
        rpm: Some(limit),
        ..Default::default()
    }
}

#[test]
fn test_half_used_minute_budget() {
    let tracker = UsageTracker::new();
    tracker.initialize("llama-70b", rpm(30));
    for _ in 0..15 {
        tracker.record("llama-70b", 10);
    }
    let headroom = tracker.headroom("llama-70b", RateMetric::RequestsPerMinute);
    assert!((headroom - 0.5).abs() < EPS, "headroom was {headroom}");
    assert!((tracker.overall_headroom("llama-70b") - 0.5).abs() < EPS);
}

#[test]
fn test_exhausted_minute_budget() {
    let tracker = UsageTracker::new();
    tracker.initialize("llama-70b", rpm(30));
    for _ in 0..30 {
        tracker.record("llama-70b", 10);
    }
    assert_eq!(tracker.headroom("llama-70b", RateMetric::RequestsPerMinute), 0.0);

    // Over-use never goes negative
    for _ in 0..5 {
        tracker.record("llama-70b", 10);
    }
    assert_eq!(tracker.headroom("llama-70b", RateMetric::RequestsPerMinute), 0.0);
    assert_eq!(tracker.overall_headroom("llama-70b"), 0.0);
}

#[test]
fn test_unset_ceiling_ignores_usage() {
    let tracker = UsageTracker::new();
    tracker.initialize("m", rpm(1_000));
    for _ in 0..50 {
        tracker.record("m", 5_000);
    }
    assert_eq!(tracker.headroom("m", RateMetric::TokensPerMinute), 1.0);
    assert_eq!(tracker.headroom("m", RateMetric::TokensPerDay), 1.0);
    assert_eq!(tracker.headroom("m", RateMetric::RequestsPerDay), 1.0);
}

#[test]
fn test_headroom_non_increasing_in_usage() {
    let tracker = UsageTracker::new();
    tracker.initialize(
        "m",
        RateLimits {
            rpm: Some(10),
            tpm: Some(1_000),
            ..Default::default()
        },
    );
    let now = Utc::now();
    let mut previous = tracker.overall_headroom_at("m", now);
    for _ in 0..15 {
        tracker.record_at("m", 90, now);
        let current = tracker.overall_headroom_at("m", now);
        assert!(current <= previous);
        assert!((0.0..=1.0).contains(&current));
        previous = current;
    }
    assert_eq!(previous, 0.0);
}

#[test]
fn test_overall_is_minimum_of_metrics() {
    let tracker = UsageTracker::new();
    tracker.initialize(
        "m",
        RateLimits {
            rpm: Some(10),
            rpd: Some(100),
            tpm: Some(1_000),
            tpd: Some(2_000),
        },
    );
    let now = Utc::now();
    for _ in 0..2 {
        tracker.record_at("m", 400, now);
    }
    let per_metric: Vec<f64> = [
        RateMetric::RequestsPerMinute,
        RateMetric::RequestsPerDay,
        RateMetric::TokensPerMinute,
        RateMetric::TokensPerDay,
    ]
    .into_iter()
    .map(|m| tracker.headroom_at("m", m, now))
    .collect();
    let min = per_metric.iter().copied().fold(1.0, f64::min);
    assert!((tracker.overall_headroom_at("m", now) - min).abs() < EPS);
    // tokens per minute: 800 of 1000
    assert!((min - 0.2).abs() < EPS);
}

#[test]
fn test_initialize_twice_keeps_first_limits() {
    let tracker = UsageTracker::new();
    assert!(tracker.initialize("m", rpm(30)));
    assert!(!tracker.initialize("m", rpm(5)));
    assert_eq!(tracker.limits("m"), Some(rpm(30)));
}

#[test]
fn test_concurrent_initialize_has_single_winner() {
    let tracker = Arc::new(UsageTracker::new());

    let handles: Vec<_> = (1..=16u64)
        .map(|n| {
            let tracker = Arc::clone(&tracker);
            thread::spawn(move || (n, tracker.initialize("contended", rpm(n))))
        })
        .collect();
    let winners: Vec<u64> = handles
        .into_iter()
        .map(|handle| handle.join().expect("initializing thread panicked"))
        .filter_map(|(n, registered)| registered.then_some(n))
        .collect();

    assert_eq!(winners.len(), 1);
    assert_eq!(tracker.limits("contended"), Some(rpm(winners[0])));
}

#[test]
fn test_events_outside_window_do_not_count() {
    let tracker = UsageTracker::new();
    tracker.initialize(
        "m",
        RateLimits {
            rpm: Some(10),
            rpd: Some(10),
            ..Default::default()
        },
    );
    let now = Utc::now();
    for _ in 0..5 {
        tracker.record_at("m", 1, now - Duration::minutes(5));
    }
    assert_eq!(tracker.headroom_at("m", RateMetric::RequestsPerMinute, now), 1.0);
    assert!((tracker.headroom_at("m", RateMetric::RequestsPerDay, now) - 0.5).abs() < EPS);

    let later = now + Duration::hours(24);
    assert_eq!(tracker.headroom_at("m", RateMetric::RequestsPerDay, later), 1.0);
}

#[test]
fn test_cleanup_purges_only_expired_events() {
    let tracker = UsageTracker::new();
    tracker.initialize("m", rpm(100));
    let now = Utc::now();
    tracker.record_at("m", 10, now - Duration::hours(25));
    tracker.record_at("m", 10, now - Duration::hours(23));
    tracker.record_at("m", 10, now);

    // Each record is one request event plus one token event
    assert_eq!(tracker.cleanup_at(now), 2);
    assert_eq!(tracker.cleanup_at(now), 0);

    let usage = tracker.usage_at("m", now);
    assert_eq!(*usage.requests_per_day(), 2);
    assert_eq!(*usage.tokens_per_day(), 20);
    assert_eq!(*usage.requests_per_minute(), 1);
    assert_eq!(usage.get(RateMetric::TokensPerMinute), 10);
    assert_eq!(usage.get(RateMetric::RequestsPerDay), *usage.requests_per_day());
}

#[test]
fn test_concurrent_records_lose_no_updates() {
    let tracker = Arc::new(UsageTracker::new());
    tracker.initialize("shared", rpm(1_000_000));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let tracker = Arc::clone(&tracker);
            thread::spawn(move || {
                for _ in 0..250 {
                    tracker.record("shared", 2);
                    let _ = tracker.overall_headroom("shared");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("recording thread panicked");
    }

    let usage = tracker.usage("shared");
    assert_eq!(*usage.requests_per_day(), 2_000);
    assert_eq!(*usage.tokens_per_day(), 4_000);
}

#[test]
fn test_reset_clears_events_but_keeps_limits() {
    let tracker = UsageTracker::new();
    tracker.initialize("a", rpm(2));
    tracker.initialize("b", rpm(2));
    tracker.record("a", 1);
    tracker.record("a", 1);
    tracker.record("b", 1);

    tracker.reset("a");
    assert_eq!(tracker.headroom("a", RateMetric::RequestsPerMinute), 1.0);
    assert_eq!(tracker.limits("a"), Some(rpm(2)));
    assert!((tracker.headroom("b", RateMetric::RequestsPerMinute) - 0.5).abs() < EPS);

    tracker.reset_all();
    assert_eq!(tracker.overall_headroom("b"), 1.0);
    assert_eq!(tracker.len(), 2);
}

#[tokio::test]
async fn test_cleanup_task_purges_in_background() {
    let tracker = Arc::new(UsageTracker::new());
    tracker.record_at("m", 5, Utc::now() - Duration::hours(30));
    assert_eq!(*tracker.usage_at("m", Utc::now() - Duration::hours(30)).requests_per_minute(), 1);

    let handle = spawn_cleanup_task(Arc::clone(&tracker), std::time::Duration::from_millis(20));
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    handle.abort();

    assert_eq!(tracker.cleanup(), 0);
    assert_eq!(*tracker.usage_at("m", Utc::now() - Duration::hours(30)).requests_per_minute(), 0);
}
