//! Score breakdowns for explanation and auditing.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Component values of a candidate's score plus the weighted total.
///
/// Component values are the unweighted inputs in `[0, 1]`; `total` is the
/// weighted sum including any preference boost, capped at 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Getters)]
pub struct ScoreBreakdown {
    /// Quality component
    quality: f64,
    /// Speed component
    speed: f64,
    /// Headroom component
    headroom: f64,
    /// Region component
    region: f64,
    /// License component
    license: f64,
    /// Preference boost applied on top of the weighted sum
    boost: f64,
    /// Weighted total
    total: f64,
}

impl ScoreBreakdown {
    /// Assemble a breakdown from computed parts.
    pub fn new(
        quality: f64,
        speed: f64,
        headroom: f64,
        region: f64,
        license: f64,
        boost: f64,
        total: f64,
    ) -> Self {
        Self {
            quality,
            speed,
            headroom,
            region,
            license,
            boost,
            total,
        }
    }

    /// True if a preference boost was applied.
    pub fn boosted(&self) -> bool {
        self.boost > 0.0
    }
}

/// Round a value to a fixed number of decimal places for display.
///
/// ```
/// use curator_core::round_to;
///
/// assert_eq!(round_to(0.123456, 3), 0.123);
/// assert_eq!(round_to(0.9996, 3), 1.0);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
