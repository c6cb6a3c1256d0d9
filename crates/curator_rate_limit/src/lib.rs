//! Usage tracking and headroom computation.
//!
//! This crate maintains, per candidate, an append-only log of request and
//! token events and derives headroom against four independent ceilings:
//! requests per minute, requests per day, tokens per minute and tokens per
//! day.
//!
//! ## Headroom
//!
//! For each metric, headroom is `(ceiling - usage_in_window) / ceiling`
//! clamped to `[0, 1]`. Per-minute metrics use a trailing 60 second window,
//! per-day metrics a trailing 24 hour window. An unset ceiling, or a
//! candidate the tracker has never seen, yields full headroom.
//!
//! ## Concurrency
//!
//! One tracker instance is shared by every in-flight selection. Each
//! candidate's log sits behind its own mutex, so appends for one candidate
//! never block reads of another, and periodic cleanup prunes each log under
//! the same lock.

mod cleanup;
mod provider;
mod tracker;

pub use cleanup::{DEFAULT_CLEANUP_INTERVAL, spawn_cleanup_task};
pub use provider::ProviderLimitsConfig;
pub use tracker::{RETENTION_HORIZON_HOURS, UsageEvent, UsageSnapshot, UsageTracker};
