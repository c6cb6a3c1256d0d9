//! Weighted multi-factor candidate scoring.

use crate::{ScoringConfig, heuristic_quality};
use curator_core::{Candidate, RequestContext, ScoreBreakdown};
use tracing::{debug, instrument};

/// Combines quality, speed, headroom, region and license into one score.
///
/// # Example
///
/// ```
/// use curator_core::{Candidate, RequestContext, SpeedClass};
/// use curator_selection::{ScoreEngine, ScoringConfig};
///
/// let engine = ScoreEngine::new(ScoringConfig::default());
/// let candidate = Candidate::builder()
///     .id("m")
///     .provider("groq")
///     .quality_index(0.9)
///     .speed_class(SpeedClass::Fast)
///     .build()
///     .unwrap();
///
/// let breakdown = engine.score(&candidate, 1.0, &RequestContext::new("hi", 0.2));
/// assert!(*breakdown.total() > 0.8 && *breakdown.total() <= 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    config: ScoringConfig,
}

impl ScoreEngine {
    /// Create an engine from a validated scoring configuration.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Quality component: benchmark index when present, name heuristic otherwise.
    pub fn quality(&self, candidate: &Candidate) -> f64 {
        match candidate.quality_index() {
            Some(index) => index.clamp(0.0, 1.0),
            None => heuristic_quality(candidate.display_name()),
        }
    }

    /// True when the candidate's provider earns the preference boost.
    pub fn is_preferred(&self, candidate: &Candidate, context: &RequestContext) -> bool {
        self.config
            .is_preferred(candidate.provider(), *context.query_type())
    }

    /// Score a candidate given its current overall headroom.
    #[instrument(skip_all, fields(candidate = %candidate.id()))]
    pub fn score(
        &self,
        candidate: &Candidate,
        headroom: f64,
        context: &RequestContext,
    ) -> ScoreBreakdown {
        let weights = &self.config.weights;

        let quality = self.quality(candidate);
        let speed = self.config.speed.score(*candidate.speed_class());
        let headroom = headroom.clamp(0.0, 1.0);
        let region = self.config.region.score(candidate.region());
        let license = self.config.license.score(candidate.license_class());

        let weighted = (weights.quality * quality
            + weights.speed * speed
            + weights.headroom * headroom
            + weights.region * region
            + weights.license * license)
            .clamp(0.0, 1.0);

        let boost = if self.is_preferred(candidate, context) {
            self.config.preference_boost
        } else {
            0.0
        };
        let total = (weighted + boost).min(1.0);

        debug!(quality, speed, headroom, region, license, boost, total, "Scored candidate");
        ScoreBreakdown::new(quality, speed, headroom, region, license, boost, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::{QueryType, SpeedClass};

    fn candidate(quality: f64) -> Candidate {
        Candidate::builder()
            .id("m")
            .provider("groq")
            .quality_index(quality)
            .speed_class(SpeedClass::Fast)
            .license("apache-2.0")
            .region("us")
            .build()
            .unwrap()
    }

    #[test]
    fn test_weighted_sum() {
        let mut config = ScoringConfig::default();
        config.region.scores.insert("us".to_string(), 1.0);
        let engine = ScoreEngine::new(config);
        let breakdown = engine.score(&candidate(0.8), 0.5, &RequestContext::new("q", 0.1));
        // 0.35*0.8 + 0.25*1.0 + 0.25*0.5 + 0.10*1.0 + 0.05*1.0
        assert!((breakdown.total() - 0.805).abs() < 1e-9);
        assert_eq!(*breakdown.boost(), 0.0);
    }

    #[test]
    fn test_missing_quality_uses_heuristic() {
        let engine = ScoreEngine::default();
        let candidate = Candidate::builder()
            .id("llama-3.3-70b-versatile")
            .provider("groq")
            .build()
            .unwrap();
        assert_eq!(engine.quality(&candidate), 0.9);
    }

    #[test]
    fn test_boost_is_capped() {
        let mut config = ScoringConfig::default();
        config.region.scores.insert("us".to_string(), 1.0);
        config.preference_boost = 0.2;
        config
            .preferences
            .insert("code".to_string(), vec!["Groq".to_string()]);
        let engine = ScoreEngine::new(config);

        let context = RequestContext::new("fn main", 0.1).with_query_type(QueryType::Code);
        let breakdown = engine.score(&candidate(1.0), 1.0, &context);
        assert!(breakdown.boosted());
        assert_eq!(*breakdown.total(), 1.0);

        let general = engine.score(&candidate(1.0), 1.0, &RequestContext::new("hi", 0.1));
        assert!(!general.boosted());
    }
}
