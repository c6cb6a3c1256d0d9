//! Selection results.

use crate::{LicenseClass, ScoreBreakdown, SpeedClass};
use serde::{Deserialize, Serialize};

/// The outcome of a successful selection call.
///
/// Numeric fields are rounded for display; the unrounded values are kept in
/// `breakdown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Provider tag of the winner
    pub provider: String,
    /// Candidate id of the winner
    pub candidate_id: String,
    /// Total score, rounded
    pub score: f64,
    /// Overall headroom at selection time, rounded
    pub headroom: f64,
    /// Speed class of the winner
    pub speed_class: SpeedClass,
    /// Quality component, rounded
    pub quality: f64,
    /// Short human-readable explanation
    pub explanation: String,
    /// Declared modalities of the winner
    #[serde(default)]
    pub modalities: Vec<String>,
    /// License family of the winner
    pub license_class: LicenseClass,
    /// Raw license identifier of the winner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Whether the capacity gate was relaxed for this selection
    #[serde(default)]
    pub relaxed: bool,
    /// Unrounded score components
    pub breakdown: ScoreBreakdown,
}

impl Selection {
    /// Speed class label, e.g. "fast".
    pub fn speed_label(&self) -> &'static str {
        self.speed_class.as_str()
    }
}
