//! Periodic purging of expired usage events.

use crate::UsageTracker;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Interval used when the owner has no preference.
pub const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Spawn a task that calls [`UsageTracker::cleanup`] every `interval`.
///
/// Must be called from within a Tokio runtime. Abort the returned handle to
/// stop the task.
pub fn spawn_cleanup_task(tracker: Arc<UsageTracker>, interval: Duration) -> JoinHandle<()> {
    info!(interval_secs = interval.as_secs_f64(), "Starting usage cleanup task");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = tracker.cleanup();
            debug!(removed, "Cleanup tick");
        }
    })
}
