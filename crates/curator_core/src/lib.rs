//! Core data types for the Curator candidate selection engine.
//!
//! This crate provides the foundation data types shared by the usage tracker,
//! the scorer and the selection orchestrator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod candidate;
mod classes;
mod limits;
mod request;
mod score;
mod selection;
mod token_estimate;

pub use candidate::{Candidate, CandidateBuilder, MAX_EXTENSIONS};
pub use classes::{LicenseClass, QueryType, SpeedClass};
pub use limits::{RateLimits, RateMetric};
pub use request::RequestContext;
pub use score::{ScoreBreakdown, round_to};
pub use selection::Selection;
pub use token_estimate::{TOKENS_PER_CHAR, estimate_tokens};
