use std::sync::Arc;
use std::time::Duration;

use gc_app::usecases::{
    restore_history_entry::DEFAULT_RESTORE_ORIGIN_TTL, ClearHistory, DeleteHistoryEntry,
    GetCurrentContent, ListHistory, RecordCopiedContent, RestoreHistoryEntry,
    StartClipboardWatcher, StopClipboardWatcher,
};
use gc_app::{AppDeps, BroadcastHistoryEvents};
use gc_core::config::AppConfig;
use gc_core::ports::WatcherControlPort;
use gc_core::HistoryEvent;
use tokio::sync::broadcast;

/// Application runtime: the wired ports plus the state shared across use
/// cases (configuration, event bus, the single watcher control).
pub struct AppRuntime {
    pub deps: AppDeps,
    pub config: AppConfig,
    events: BroadcastHistoryEvents,
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl AppRuntime {
    pub fn new(
        deps: AppDeps,
        config: AppConfig,
        events: BroadcastHistoryEvents,
        watcher_control: Arc<dyn WatcherControlPort>,
    ) -> Self {
        Self {
            deps,
            config,
            events,
            watcher_control,
        }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<HistoryEvent> {
        self.events.subscribe()
    }
}

/// Builds use cases with their ports taken from an [`AppRuntime`].
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn record_copied_content(&self) -> RecordCopiedContent {
        let deps = &self.runtime.deps;
        RecordCopiedContent::new(
            deps.history_repo.clone(),
            deps.history_events.clone(),
            deps.clock.clone(),
            self.runtime.config.storage.max_history_items,
        )
    }

    pub fn list_history(&self) -> ListHistory {
        ListHistory::new(self.runtime.deps.history_repo.clone())
    }

    pub fn get_current_content(&self) -> GetCurrentContent {
        GetCurrentContent::new(self.runtime.deps.history_repo.clone())
    }

    /// The restore marker lives for at least two watcher polls.
    pub fn restore_history_entry(&self) -> RestoreHistoryEntry {
        let deps = &self.runtime.deps;
        let poll = Duration::from_millis(self.runtime.config.watcher.poll_interval_ms);
        RestoreHistoryEntry::new(
            deps.history_repo.clone(),
            deps.history_events.clone(),
            deps.clipboard.clone(),
            deps.change_origin.clone(),
            deps.clock.clone(),
        )
        .with_origin_ttl(DEFAULT_RESTORE_ORIGIN_TTL.max(poll * 2))
    }

    pub fn delete_history_entry(&self) -> DeleteHistoryEntry {
        let deps = &self.runtime.deps;
        DeleteHistoryEntry::new(deps.history_repo.clone(), deps.history_events.clone())
    }

    pub fn clear_history(&self) -> ClearHistory {
        let deps = &self.runtime.deps;
        ClearHistory::new(deps.history_repo.clone(), deps.history_events.clone())
    }

    pub fn start_clipboard_watcher(&self) -> StartClipboardWatcher {
        StartClipboardWatcher::new(self.runtime.watcher_control.clone())
    }

    pub fn stop_clipboard_watcher(&self) -> StopClipboardWatcher {
        StopClipboardWatcher::new(self.runtime.watcher_control.clone())
    }
}
