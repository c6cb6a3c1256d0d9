//! End-to-end selection scenarios.

use curator_core::{Candidate, LicenseClass, QueryType, RateLimits, RequestContext, SpeedClass};
use curator_error::SelectionErrorKind;
use curator_rate_limit::UsageTracker;
use curator_selection::{CuratorConfig, SelectionOrchestrator};
use std::sync::Arc;

fn candidate(id: &str, quality: f64, speed: SpeedClass) -> Candidate {
    Candidate::builder()
        .id(id)
        .provider("test")
        .quality_index(quality)
        .speed_class(speed)
        .rate_limits(RateLimits {
            rpm: Some(10),
            ..Default::default()
        })
        .build()
        .expect("valid candidate")
}

/// Orchestrator whose tracker already shows `uses[i]` requests for `candidates[i]`.
fn with_usage(candidates: &[Candidate], uses: &[usize]) -> SelectionOrchestrator {
    let config = CuratorConfig::default();
    let tracker = Arc::new(UsageTracker::with_fallback_limits(config.rate_limits.default));
    for (candidate, count) in candidates.iter().zip(uses) {
        tracker.initialize(candidate.id(), config.rate_limits.resolve(candidate));
        for _ in 0..*count {
            tracker.record(candidate.id(), 1);
        }
    }
    SelectionOrchestrator::new(tracker, &config)
}

#[test]
fn test_strongest_candidate_wins() {
    let candidates = vec![
        candidate("a", 0.9, SpeedClass::Fast),
        candidate("b", 0.7, SpeedClass::Medium),
        candidate("c", 0.5, SpeedClass::Slow),
    ];
    let orchestrator = with_usage(&candidates, &[1, 3, 5]);
    let context = RequestContext::new("Explain borrow checking", 0.2);

    let scored = orchestrator.score_all(&candidates, &context);
    assert!((scored[0].headroom - 0.9).abs() < 1e-9);
    assert!((scored[1].headroom - 0.7).abs() < 1e-9);
    assert!((scored[2].headroom - 0.5).abs() < 1e-9);
    assert!(scored[0].total() > scored[1].total());
    assert!(scored[0].total() > scored[2].total());

    let selection = orchestrator
        .select_best(&candidates, &context)
        .expect("selection succeeds");
    assert_eq!(selection.candidate_id, "a");
    assert_eq!(selection.provider, "test");
    assert_eq!(selection.speed_label(), "fast");
    assert_eq!(selection.quality, 0.9);
    assert_eq!(selection.headroom, 0.9);
    assert!(!selection.relaxed);
    assert!(selection.explanation.contains("high quality"));
    assert!(selection.explanation.contains("excellent headroom"));
    assert!(selection.explanation.contains("fastest class"));
}

#[test]
fn test_empty_pool_is_an_error() {
    let orchestrator = SelectionOrchestrator::from_config(&CuratorConfig::default());
    let err = orchestrator
        .select_best(&[], &RequestContext::new("anything", 0.5))
        .unwrap_err();
    assert_eq!(err.kind(), &SelectionErrorKind::NoCandidates);
}

#[test]
fn test_out_of_range_complexity_is_an_error() {
    let orchestrator = SelectionOrchestrator::from_config(&CuratorConfig::default());
    let candidates = vec![candidate("a", 0.9, SpeedClass::Fast)];
    for complexity in [-0.1, 1.01] {
        let err = orchestrator
            .select_best(&candidates, &RequestContext::new("q", complexity))
            .unwrap_err();
        assert_eq!(err.kind(), &SelectionErrorKind::InvalidComplexity(complexity));
    }
    // Validation happens before anything is recorded
    assert_eq!(*orchestrator.tracker().usage("a").requests_per_day(), 0);
}

#[test]
fn test_exhausted_pool_relaxes_instead_of_failing() {
    let candidates = vec![
        candidate("a", 0.9, SpeedClass::Medium),
        candidate("b", 0.6, SpeedClass::Medium),
    ];
    let orchestrator = with_usage(&candidates, &[5, 6]);
    let context = RequestContext::new("Prove the theorem step by step", 0.8);

    let selection = orchestrator
        .select_best(&candidates, &context)
        .expect("relaxed selection succeeds");
    assert!(selection.relaxed);
    assert_eq!(selection.candidate_id, "a");
    assert!(selection.explanation.contains("capacity gate relaxed"));
}

#[test]
fn test_gate_prefers_candidate_with_capacity() {
    // "a" scores higher on quality but is nearly exhausted
    let candidates = vec![
        candidate("a", 1.0, SpeedClass::Fast),
        candidate("b", 0.5, SpeedClass::Medium),
    ];
    let orchestrator = with_usage(&candidates, &[8, 0]);
    let selection = orchestrator
        .select_best(&candidates, &RequestContext::new("q", 0.9))
        .expect("selection succeeds");
    assert_eq!(selection.candidate_id, "b");
    assert!(!selection.relaxed);
}

#[test]
fn test_tie_break_is_deterministic() {
    let candidates = vec![
        candidate("zeta", 0.7, SpeedClass::Fast),
        candidate("alpha", 0.7, SpeedClass::Fast),
    ];
    for _ in 0..3 {
        let orchestrator = SelectionOrchestrator::from_config(&CuratorConfig::default());
        let selection = orchestrator
            .select_best(&candidates, &RequestContext::new("q", 0.0))
            .expect("selection succeeds");
        assert_eq!(selection.candidate_id, "alpha");
    }
}

#[test]
fn test_repeated_selection_spreads_load() {
    let candidates = vec![
        candidate("a", 0.9, SpeedClass::Fast),
        candidate("b", 0.85, SpeedClass::Fast),
    ];
    let orchestrator = SelectionOrchestrator::from_config(&CuratorConfig::default());
    let context = RequestContext::new("q", 0.0);
    let winners: Vec<String> = (0..10)
        .map(|_| {
            orchestrator
                .select_best(&candidates, &context)
                .expect("selection succeeds")
                .candidate_id
        })
        .collect();
    assert!(winners.iter().any(|w| w == "a"));
    assert!(winners.iter().any(|w| w == "b"));
}

#[test]
fn test_preferred_provider_is_explained() {
    let mut config = CuratorConfig::default();
    config
        .scoring
        .preferences
        .insert("code".to_string(), vec!["groq".to_string()]);
    let orchestrator = SelectionOrchestrator::from_config(&config);
    let candidates = vec![
        Candidate::builder()
            .id("llama-3.3-70b-versatile")
            .provider("groq")
            .license("llama3.3")
            .build()
            .expect("valid candidate"),
    ];
    let context = RequestContext::new("fn main() {}", 0.1).with_query_type(QueryType::Code);
    let selection = orchestrator
        .select_best(&candidates, &context)
        .expect("selection succeeds");
    assert!(selection.breakdown.boosted());
    assert_eq!(selection.license_class, LicenseClass::OpenSource);
    assert_eq!(selection.license.as_deref(), Some("llama3.3"));
    assert!(selection.explanation.contains("preferred provider for code"));
    assert!(selection.explanation.contains("high quality"));
}
