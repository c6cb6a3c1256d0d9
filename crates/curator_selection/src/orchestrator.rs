//! End-to-end selection: score, gate, pick, record.

use crate::{
    AdmissionPolicy, CuratorConfig, ExplanationInputs, ScoreEngine, ScoredCandidate, explain,
};
use curator_core::{Candidate, RequestContext, Selection, estimate_tokens, round_to};
use curator_error::{SelectionError, SelectionErrorKind, SelectionResult};
use curator_rate_limit::{ProviderLimitsConfig, UsageTracker};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, info, instrument};

const DISPLAY_DECIMALS: u32 = 3;

/// Picks the best candidate for a request and commits its usage.
///
/// Each call is independent; the only shared state is the usage tracker.
///
/// # Example
///
/// ```
/// use curator_core::{Candidate, RequestContext, SpeedClass};
/// use curator_selection::{CuratorConfig, SelectionOrchestrator};
///
/// let orchestrator = SelectionOrchestrator::from_config(&CuratorConfig::default());
/// let candidates = vec![
///     Candidate::builder().id("a").provider("groq").quality_index(0.9).build().unwrap(),
///     Candidate::builder().id("b").provider("groq").quality_index(0.4).build().unwrap(),
/// ];
///
/// let selection = orchestrator
///     .select_best(&candidates, &RequestContext::new("hello", 0.2))
///     .unwrap();
/// assert_eq!(selection.candidate_id, "a");
/// ```
#[derive(Debug, Clone)]
pub struct SelectionOrchestrator {
    tracker: Arc<UsageTracker>,
    engine: ScoreEngine,
    policy: AdmissionPolicy,
    provider_limits: ProviderLimitsConfig,
}

impl SelectionOrchestrator {
    /// Create an orchestrator sharing an existing tracker.
    pub fn new(tracker: Arc<UsageTracker>, config: &CuratorConfig) -> Self {
        Self {
            tracker,
            engine: ScoreEngine::new(config.scoring.clone()),
            policy: AdmissionPolicy::new(config.admission.clone()),
            provider_limits: config.rate_limits.clone(),
        }
    }

    /// Create an orchestrator with its own tracker.
    pub fn from_config(config: &CuratorConfig) -> Self {
        let tracker = Arc::new(UsageTracker::with_fallback_limits(
            config.rate_limits.default,
        ));
        Self::new(tracker, config)
    }

    /// Shared usage tracker, for cleanup scheduling and resets.
    pub fn tracker(&self) -> &Arc<UsageTracker> {
        &self.tracker
    }

    /// Scoring engine in use.
    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    /// Admission policy in use.
    pub fn policy(&self) -> &AdmissionPolicy {
        &self.policy
    }

    /// Register and score every candidate without committing usage.
    pub fn score_all<'a>(
        &self,
        candidates: &'a [Candidate],
        context: &RequestContext,
    ) -> Vec<ScoredCandidate<'a>> {
        candidates
            .iter()
            .map(|candidate| {
                self.tracker
                    .initialize(candidate.id(), self.provider_limits.resolve(candidate));
                let headroom = self.tracker.overall_headroom(candidate.id());
                let breakdown = self.engine.score(candidate, headroom, context);
                ScoredCandidate {
                    candidate,
                    headroom,
                    breakdown,
                }
            })
            .collect()
    }

    /// Select the best candidate and record one request against it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidComplexity` when the complexity lies outside `[0, 1]`
    /// or is NaN, and `NoCandidates` when `candidates` is empty.
    #[instrument(skip_all, fields(candidates = candidates.len(), complexity = *context.complexity()))]
    pub fn select_best(
        &self,
        candidates: &[Candidate],
        context: &RequestContext,
    ) -> SelectionResult<Selection> {
        let complexity = *context.complexity();
        if !(0.0..=1.0).contains(&complexity) {
            return Err(SelectionError::new(SelectionErrorKind::InvalidComplexity(
                complexity,
            )));
        }
        if candidates.is_empty() {
            return Err(SelectionError::new(SelectionErrorKind::NoCandidates));
        }

        let scored = self.score_all(candidates, context);
        let mut admission = self.policy.admit(scored, complexity);
        admission.admitted.sort_by(rank);

        let Some(winner) = admission.admitted.first().copied() else {
            return Err(SelectionError::new(SelectionErrorKind::NoCandidates));
        };
        let candidate = winner.candidate;

        let tokens = estimate_tokens(context.query_text());
        self.tracker.record(candidate.id(), tokens);
        debug!(candidate = %candidate.id(), tokens, "Recorded usage for selected candidate");

        let preferred_for = self
            .engine
            .is_preferred(candidate, context)
            .then_some(*context.query_type());
        let explanation = explain(&ExplanationInputs {
            breakdown: winner.breakdown,
            speed_class: *candidate.speed_class(),
            license_class: candidate.license_class(),
            preferred_for,
            relaxed: admission.relaxed,
        });

        info!(
            candidate = %candidate.id(),
            provider = %candidate.provider(),
            score = winner.total(),
            relaxed = admission.relaxed,
            "Selected candidate"
        );

        Ok(Selection {
            provider: candidate.provider().clone(),
            candidate_id: candidate.id().clone(),
            score: round_to(winner.total(), DISPLAY_DECIMALS),
            headroom: round_to(winner.headroom, DISPLAY_DECIMALS),
            speed_class: *candidate.speed_class(),
            quality: round_to(*winner.breakdown.quality(), DISPLAY_DECIMALS),
            explanation,
            modalities: candidate.modalities().clone(),
            license_class: candidate.license_class(),
            license: candidate.license().clone(),
            relaxed: admission.relaxed,
            breakdown: winner.breakdown,
        })
    }
}

/// Score descending, then quality descending, then candidate id ascending.
fn rank(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.total()
        .total_cmp(&a.total())
        .then_with(|| b.breakdown.quality().total_cmp(a.breakdown.quality()))
        .then_with(|| a.candidate.id().cmp(b.candidate.id()))
}
