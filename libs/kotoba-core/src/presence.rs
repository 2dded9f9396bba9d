//! Presence tracking for active study sessions.
//!
//! Sessions report heartbeats; a session counts as active while its last
//! heartbeat is younger than the liveness window. The registry sits behind a
//! single mutex that is only held for the map operation itself.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::session::SessionId;

/// How long a heartbeat keeps a session active.
pub const LIVENESS_WINDOW: Duration = Duration::from_secs(60);

/// Shared registry of session heartbeats.
#[derive(Debug)]
pub struct PresenceTracker {
    sessions: Mutex<HashMap<SessionId, Instant>>,
    window: Duration,
}

impl Default for PresenceTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PresenceTracker {
    pub fn new() -> Self {
        Self::with_window(LIVENESS_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            window,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    // A poisoned registry still holds valid timestamps.
    fn sessions(&self) -> MutexGuard<'_, HashMap<SessionId, Instant>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a heartbeat for a session.
    pub fn touch(&self, session_id: &SessionId) {
        let now = Instant::now();
        self.sessions().insert(session_id.clone(), now);
    }

    /// Forget a session that ended gracefully.
    pub fn remove(&self, session_id: &SessionId) {
        self.sessions().remove(session_id);
    }

    /// Number of sessions seen within the liveness window.
    ///
    /// Stale entries are skipped, not deleted.
    pub fn active_count(&self) -> usize {
        let now = Instant::now();
        self.sessions()
            .values()
            .filter(|seen| now.duration_since(**seen) < self.window)
            .count()
    }

    /// Number of entries held, stale ones included.
    pub fn tracked_count(&self) -> usize {
        self.sessions().len()
    }

    /// Delete stale entries and return how many were removed.
    pub fn prune_stale(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions();
        let before = sessions.len();
        sessions.retain(|_, seen| now.duration_since(*seen) < self.window);
        before - sessions.len()
    }
}

/// Periodic heartbeat for one session.
///
/// Touches the session immediately and then once per period until stopped.
/// Stopping (or dropping) cancels the timer and removes the session once.
#[derive(Debug)]
pub struct Heartbeat {
    tracker: Arc<PresenceTracker>,
    session_id: SessionId,
    task: Option<JoinHandle<()>>,
}

impl Heartbeat {
    /// Spawn the heartbeat task. Must be called inside a tokio runtime.
    pub fn spawn(tracker: Arc<PresenceTracker>, session_id: SessionId, period: Duration) -> Self {
        let task = tokio::spawn({
            let tracker = Arc::clone(&tracker);
            let session_id = session_id.clone();
            async move {
                let mut ticker = time::interval(period);
                loop {
                    ticker.tick().await;
                    tracker.touch(&session_id);
                }
            }
        });

        Self {
            tracker,
            session_id,
            task: Some(task),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Cancel the timer, wait for it to finish, then remove the session.
    pub async fn stop(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
            self.tracker.remove(&self.session_id);
        }
    }
}

impl Drop for Heartbeat {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.tracker.remove(&self.session_id);
        }
    }
}
