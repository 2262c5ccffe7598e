//! Repo-list fetch task lifecycle.
//!
//! Fetches run off the input path and report back through the session event
//! channel tagged with the generation that started them.

use super::{EventSender, SessionEvent};
use crate::api::RepoSource;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Outstanding fetch owned by one session generation.
pub(super) struct PendingFetch {
    pub(super) generation: u64,
    handle: JoinHandle<()>,
}

impl PendingFetch {
    /// Cancel the task; its completion event is never sent.
    pub(super) fn abort(self) {
        debug!(generation = self.generation, "aborting pending fetch");
        self.handle.abort();
    }

    pub(super) fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawn a fetch whose completion is delivered as `ProjectsFetched`.
pub(super) fn spawn_fetch_task(
    repos: Arc<dyn RepoSource>,
    generation: u64,
    events: EventSender,
) -> PendingFetch {
    let handle = tokio::spawn(async move {
        let result = repos.fetch_repos().await;
        // The receiver is gone once the session shut down.
        let _ = events.send(SessionEvent::ProjectsFetched { generation, result });
    });
    PendingFetch { generation, handle }
}
