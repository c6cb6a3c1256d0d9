//! Candidate scoring, admission and selection.
//!
//! The [`SelectionOrchestrator`] ties the pieces together for each request:
//!
//! 1. Every candidate is registered with the shared [`UsageTracker`] and
//!    scored by the [`ScoreEngine`] using its current headroom.
//! 2. The [`AdmissionPolicy`] drops candidates without enough headroom for
//!    the request's complexity. If nothing survives, the gate is relaxed and
//!    the full scored list is used.
//! 3. The highest score wins; ties go to higher quality, then lower id.
//! 4. One request and the estimated tokens are recorded for the winner.
//!
//! [`UsageTracker`]: curator_rate_limit::UsageTracker

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod admission;
mod benchmark;
mod config;
mod explanation;
mod orchestrator;
mod quality;
mod score;

pub use admission::{Admission, AdmissionPolicy, ScoredCandidate};
pub use benchmark::{
    BenchmarkIndex, BenchmarkRecord, ContainsMatcher, ExactMatcher, MatchStrategy, SlugMatch,
    SlugMatcher, SuffixMatcher, default_matchers,
};
pub use config::{
    AdmissionConfig, AdmissionTier, CuratorConfig, LicenseScores, RegionScores, ScoringConfig,
    ScoringWeights, SpeedScores, WEIGHT_EPSILON,
};
pub use explanation::{ExplanationInputs, explain};
pub use orchestrator::SelectionOrchestrator;
pub use quality::{NEUTRAL_QUALITY, heuristic_quality, parameter_count};
pub use score::ScoreEngine;
