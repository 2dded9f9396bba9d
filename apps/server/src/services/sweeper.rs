//! Background pruning of stale presence entries.

use std::sync::Arc;

use kotoba_core::PresenceTracker;
use tokio::task::JoinHandle;
use tokio::time;

/// Prune stale sessions once per liveness window.
pub fn spawn(tracker: Arc<PresenceTracker>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(tracker.window());
        loop {
            ticker.tick().await;
            let removed = tracker.prune_stale();
            if removed > 0 {
                tracing::debug!(
                    "Pruned {} stale sessions, {} active",
                    removed,
                    tracker.active_count()
                );
            }
        }
    })
}
