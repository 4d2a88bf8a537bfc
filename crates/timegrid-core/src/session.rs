//! Glue between the pure layout and configuration persistence.

use std::sync::Arc;

use crate::layout::{layout, LayoutOptions, RenderModel, ViewMode};
use crate::schedule::Day;
use crate::storage::{ConfigStore, PendingWrite, PrioritySync, SyncOutcome, TimetableConfig};

/// Tally of the writes waited on by [`TimetableSession::flush`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub stored: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Holds the in-memory configuration across layout passes.
///
/// Each [`refresh`](Self::refresh) folds the pass's delta into the
/// in-memory configuration before returning and queues the write in the
/// background, so the next pass already sees the extended priority list.
pub struct TimetableSession {
    config: TimetableConfig,
    sync: PrioritySync,
    pending: Vec<PendingWrite>,
}

impl TimetableSession {
    pub fn new(config: TimetableConfig, store: Arc<dyn ConfigStore>) -> Self {
        Self {
            config,
            sync: PrioritySync::new(store),
            pending: Vec::new(),
        }
    }

    /// Start from whatever the store holds, falling back to defaults.
    pub fn open(store: Arc<dyn ConfigStore>) -> Self {
        let config = store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default timetable configuration");
            TimetableConfig::default()
        });
        Self::new(config, store)
    }

    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// Replace the configuration, e.g. after the user toggled a setting.
    pub fn set_config(&mut self, config: TimetableConfig) {
        self.config = config;
    }

    /// Lay out `week` and persist any priority growth in the background.
    ///
    /// Without a tokio runtime the write happens before returning.
    pub fn refresh(&mut self, week: &[Day], view: ViewMode, options: &LayoutOptions) -> RenderModel {
        let model = layout(week, &self.config, view, options);
        if let Some(delta) = &model.config_delta {
            self.config.apply(delta);
            self.pending.push(self.sync.dispatch(delta.clone()));
        }
        model
    }

    /// Wait for every write queued since the last flush, finished or not.
    pub async fn flush(&mut self) -> FlushReport {
        let mut report = FlushReport::default();
        for pending in self.pending.drain(..) {
            match pending.outcome().await {
                SyncOutcome::Stored(_) => report.stored += 1,
                SyncOutcome::Skipped => report.skipped += 1,
                SyncOutcome::Failed => report.failed += 1,
            }
        }
        report
    }
}
