//! Capacity gate: complexity-dependent minimum headroom.

use crate::AdmissionConfig;
use curator_core::{Candidate, ScoreBreakdown};
use tracing::{debug, warn};

/// A candidate with its score and the headroom it was scored with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    /// The candidate
    pub candidate: &'a Candidate,
    /// Overall headroom at scoring time
    pub headroom: f64,
    /// Score components and total
    pub breakdown: ScoreBreakdown,
}

impl ScoredCandidate<'_> {
    /// Weighted total including any boost.
    pub fn total(&self) -> f64 {
        *self.breakdown.total()
    }
}

/// Result of running the gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Admission<'a> {
    /// Candidates eligible for selection
    pub admitted: Vec<ScoredCandidate<'a>>,
    /// Minimum headroom the request demanded, if any
    pub required_headroom: Option<f64>,
    /// True when no candidate passed and the full list was used instead
    pub relaxed: bool,
}

/// Filters scored candidates by headroom relative to request complexity.
///
/// ```
/// use curator_selection::AdmissionPolicy;
///
/// let policy = AdmissionPolicy::default();
/// assert_eq!(policy.required_headroom(0.8), Some(0.6));
/// assert_eq!(policy.required_headroom(0.5), Some(0.3));
/// assert_eq!(policy.required_headroom(0.4), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdmissionPolicy {
    config: AdmissionConfig,
}

impl AdmissionPolicy {
    /// Create a policy from validated tiers.
    pub fn new(config: AdmissionConfig) -> Self {
        Self { config }
    }

    /// Minimum headroom a request of this complexity requires.
    ///
    /// Headroom must strictly exceed the returned value.
    pub fn required_headroom(&self, complexity: f64) -> Option<f64> {
        self.config
            .tiers
            .iter()
            .find(|tier| complexity > tier.min_complexity)
            .map(|tier| tier.min_headroom)
    }

    /// Whether a candidate with `headroom` passes the gate.
    pub fn passes(&self, headroom: f64, complexity: f64) -> bool {
        self.required_headroom(complexity)
            .is_none_or(|required| headroom > required)
    }

    /// Apply the gate. An empty result relaxes to the full scored list.
    pub fn admit<'a>(&self, scored: Vec<ScoredCandidate<'a>>, complexity: f64) -> Admission<'a> {
        let required_headroom = self.required_headroom(complexity);
        let admitted: Vec<_> = scored
            .iter()
            .filter(|s| self.passes(s.headroom, complexity))
            .copied()
            .collect();

        if admitted.is_empty() && !scored.is_empty() {
            warn!(
                complexity,
                required = required_headroom.unwrap_or(0.0),
                candidates = scored.len(),
                "No candidate meets the headroom requirement, relaxing capacity gate"
            );
            return Admission {
                admitted: scored,
                required_headroom,
                relaxed: true,
            };
        }

        debug!(
            admitted = admitted.len(),
            rejected = scored.len() - admitted.len(),
            "Capacity gate applied"
        );
        Admission {
            admitted,
            required_headroom,
            relaxed: false,
        }
    }
}
