//! Capacity gate and score bound properties.

use curator_core::{Candidate, RequestContext, SpeedClass};
use curator_selection::{AdmissionPolicy, ScoreEngine, ScoredCandidate, ScoringConfig};

fn pool() -> Vec<Candidate> {
    let speeds = [SpeedClass::Fast, SpeedClass::Medium, SpeedClass::Slow];
    (0..11)
        .map(|i| {
            Candidate::builder()
                .id(format!("m{}", i))
                .provider("p")
                .quality_index(i as f64 / 10.0)
                .speed_class(speeds[i % 3])
                .build()
                .expect("valid candidate")
        })
        .collect()
}

fn scored<'a>(engine: &ScoreEngine, candidates: &'a [Candidate]) -> Vec<ScoredCandidate<'a>> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            let headroom = i as f64 / 10.0;
            ScoredCandidate {
                candidate,
                headroom,
                breakdown: engine.score(candidate, headroom, &RequestContext::new("q", 0.5)),
            }
        })
        .collect()
}

#[test]
fn test_higher_complexity_admits_a_subset() {
    let engine = ScoreEngine::default();
    let policy = AdmissionPolicy::default();
    let candidates = pool();
    let pool = scored(&engine, &candidates);

    let strict = policy.admit(pool.clone(), 0.8);
    let lenient = policy.admit(pool.clone(), 0.3);
    assert!(!strict.relaxed);
    assert!(strict.admitted.len() < lenient.admitted.len());
    for admitted in &strict.admitted {
        assert!(
            lenient
                .admitted
                .iter()
                .any(|l| l.candidate.id() == admitted.candidate.id())
        );
        assert!(admitted.headroom > 0.6);
    }
}

#[test]
fn test_relaxation_returns_full_pool() {
    let engine = ScoreEngine::default();
    let policy = AdmissionPolicy::default();
    let candidates = pool();
    // Only the low-headroom half
    let low: Vec<_> = scored(&engine, &candidates).into_iter().take(5).collect();

    let admission = policy.admit(low.clone(), 0.9);
    assert!(admission.relaxed);
    assert_eq!(admission.required_headroom, Some(0.6));
    assert_eq!(admission.admitted, low);
}

#[test]
fn test_scores_stay_in_unit_interval() {
    let engine = ScoreEngine::new(ScoringConfig::default());
    let candidates = pool();
    for candidate in &candidates {
        for headroom in [0.0, 0.25, 0.5, 1.0, 1.5, -0.5] {
            let breakdown = engine.score(candidate, headroom, &RequestContext::new("q", 0.1));
            assert!((0.0..=1.0).contains(breakdown.total()));
            assert!((0.0..=1.0).contains(breakdown.headroom()));
        }
    }
}
