//! Human-readable selection explanations.

use curator_core::{LicenseClass, QueryType, ScoreBreakdown, SpeedClass};

const HIGH_QUALITY: f64 = 0.8;
const EXCELLENT_HEADROOM: f64 = 0.8;
const LIMITED_HEADROOM: f64 = 0.3;

/// Facts about a winning candidate that may be worth mentioning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplanationInputs {
    /// Score components of the winner
    pub breakdown: ScoreBreakdown,
    /// Speed class of the winner
    pub speed_class: SpeedClass,
    /// License class of the winner
    pub license_class: LicenseClass,
    /// Query type the winner was preferred for, if boosted
    pub preferred_for: Option<QueryType>,
    /// Whether the capacity gate was relaxed
    pub relaxed: bool,
}

/// Join the phrases whose conditions hold.
///
/// ```
/// use curator_core::{LicenseClass, ScoreBreakdown, SpeedClass};
/// use curator_selection::{ExplanationInputs, explain};
///
/// let inputs = ExplanationInputs {
///     breakdown: ScoreBreakdown::new(0.9, 1.0, 0.95, 0.5, 1.0, 0.0, 0.9),
///     speed_class: SpeedClass::Fast,
///     license_class: LicenseClass::OpenSource,
///     preferred_for: None,
///     relaxed: false,
/// };
/// assert_eq!(
///     explain(&inputs),
///     "high quality, excellent headroom, fastest class, open-source license"
/// );
/// ```
pub fn explain(inputs: &ExplanationInputs) -> String {
    let mut phrases = Vec::new();

    if *inputs.breakdown.quality() >= HIGH_QUALITY {
        phrases.push("high quality".to_string());
    }
    let headroom = *inputs.breakdown.headroom();
    if headroom >= EXCELLENT_HEADROOM {
        phrases.push("excellent headroom".to_string());
    } else if headroom < LIMITED_HEADROOM {
        phrases.push("limited headroom".to_string());
    }
    if inputs.speed_class == SpeedClass::Fast {
        phrases.push("fastest class".to_string());
    }
    if inputs.license_class == LicenseClass::OpenSource {
        phrases.push("open-source license".to_string());
    }
    if let Some(query_type) = inputs.preferred_for {
        phrases.push(format!("preferred provider for {}", query_type));
    }
    if inputs.relaxed {
        phrases.push("capacity gate relaxed".to_string());
    }

    if phrases.is_empty() {
        "best available score".to_string()
    } else {
        phrases.join(", ")
    }
}
