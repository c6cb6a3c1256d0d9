//! Curator - capacity-aware candidate selection
//!
//! Curator picks, for each request, the best backend resource from a pool of
//! capability-tagged, rate-limited candidates. It trades off quality, speed,
//! remaining capacity, region and license, and gates candidates by headroom
//! relative to request complexity.
//!
//! # Quick Start
//!
//! ```
//! use curator::{Candidate, CuratorConfig, RequestContext, SelectionOrchestrator, SpeedClass};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = SelectionOrchestrator::from_config(&CuratorConfig::default());
//!
//! let candidates = vec![
//!     Candidate::builder()
//!         .id("llama-3.3-70b-versatile")
//!         .provider("groq")
//!         .speed_class(SpeedClass::Fast)
//!         .build()?,
//!     Candidate::builder()
//!         .id("gemini-2.0-flash")
//!         .provider("google")
//!         .quality_index(0.85)
//!         .build()?,
//! ];
//!
//! let selection = orchestrator.select_best(&candidates, &RequestContext::new("Hello", 0.3))?;
//! println!("{} ({})", selection.candidate_id, selection.explanation);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Curator is organized as a workspace with focused crates:
//!
//! - `curator_error` - Error types
//! - `curator_core` - Candidates, rate limits, request context, selections
//! - `curator_rate_limit` - Sliding-window usage tracking and headroom
//! - `curator_selection` - Scoring, admission, orchestration, benchmark matching
//!
//! This crate re-exports everything for convenience.

pub use curator_core::*;
pub use curator_error::*;
pub use curator_rate_limit::*;
pub use curator_selection::*;

mod loader;
pub mod observability;

pub use loader::{load_benchmarks, load_candidates, load_config};
pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};
