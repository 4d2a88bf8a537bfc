//! Background persistence of configuration deltas.
//!
//! Layout never waits on disk: the caller folds the delta into its
//! in-memory configuration right away and hands it here. A failed write is
//! logged and dropped; the next layout pass derives the same delta again.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::config::ConfigDelta;
use super::store::ConfigStore;
use crate::priority::PriorityList;

/// Result of one persisted delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Merged and stored; carries the list as it now is on disk.
    Stored(PriorityList),
    /// Priority ordering was disabled in the store, nothing written.
    Skipped,
    /// The store failed; already logged.
    Failed,
}

/// A write handed to [`PrioritySync::dispatch`].
#[derive(Debug)]
pub enum PendingWrite {
    /// Running on the runtime's blocking pool.
    Background(JoinHandle<SyncOutcome>),
    /// Already done, because no runtime was available.
    Ready(SyncOutcome),
}

impl PendingWrite {
    /// Wait for the write to finish.
    pub async fn outcome(self) -> SyncOutcome {
        match self {
            PendingWrite::Background(handle) => handle.await.unwrap_or_else(|e| {
                warn!(error = %e, "course priority write task did not finish");
                SyncOutcome::Failed
            }),
            PendingWrite::Ready(outcome) => outcome,
        }
    }
}

/// Dispatches [`ConfigDelta`]s to a [`ConfigStore`] off the caller's task.
#[derive(Clone)]
pub struct PrioritySync {
    store: Arc<dyn ConfigStore>,
}

impl PrioritySync {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Persist `delta` on the blocking pool of the current tokio runtime.
    ///
    /// Outside a runtime the write happens inline before returning.
    pub fn dispatch(&self, delta: ConfigDelta) -> PendingWrite {
        match Handle::try_current() {
            Ok(handle) => {
                let store = Arc::clone(&self.store);
                PendingWrite::Background(
                    handle.spawn_blocking(move || Self::persist(store.as_ref(), &delta)),
                )
            }
            Err(_) => {
                debug!("no async runtime, persisting course priority list inline");
                PendingWrite::Ready(Self::persist(self.store.as_ref(), &delta))
            }
        }
    }

    fn persist(store: &dyn ConfigStore, delta: &ConfigDelta) -> SyncOutcome {
        match delta {
            ConfigDelta::TimetablePriority(list) => match store.merge_priority(list) {
                Ok(Some(merged)) => {
                    debug!(entries = merged.len(), "persisted course priority list");
                    SyncOutcome::Stored(merged)
                }
                Ok(None) => {
                    debug!("course priority disabled in store, write skipped");
                    SyncOutcome::Skipped
                }
                Err(e) => {
                    warn!(error = %e, "failed to persist course priority list");
                    SyncOutcome::Failed
                }
            },
        }
    }
}
