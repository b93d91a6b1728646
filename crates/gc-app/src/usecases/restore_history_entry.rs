//! Use case for putting a history item back on the system clipboard

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use gc_core::ports::{
    ClipboardChangeOriginPort, ClockPort, HistoryEventPort, HistoryRepositoryPort,
    SystemClipboardPort,
};
use gc_core::{content_hash, ClipKey, ClipboardChangeOrigin, CopiedContent, HistoryEvent};
use tracing::{info, info_span, Instrument};

/// How long the restore marker waits for the watcher to observe the write.
pub const DEFAULT_RESTORE_ORIGIN_TTL: Duration = Duration::from_secs(1);

#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("history item {0} not found")]
    NotFound(ClipKey),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Writes a history item to the system clipboard and promotes it to the
/// newest position.
///
/// The write is marked as [`ClipboardChangeOrigin::LocalRestore`] first so
/// the capture path skips the resulting clipboard change. Promotion moves
/// the item under a fresh key in one repository transaction; afterwards
/// `remove-content` for the old key and `new-content` for the new one are
/// emitted.
pub struct RestoreHistoryEntry {
    history_repo: Arc<dyn HistoryRepositoryPort>,
    history_events: Arc<dyn HistoryEventPort>,
    clipboard: Arc<dyn SystemClipboardPort>,
    change_origin: Arc<dyn ClipboardChangeOriginPort>,
    clock: Arc<dyn ClockPort>,
    origin_ttl: Duration,
}

impl RestoreHistoryEntry {
    pub fn new(
        history_repo: Arc<dyn HistoryRepositoryPort>,
        history_events: Arc<dyn HistoryEventPort>,
        clipboard: Arc<dyn SystemClipboardPort>,
        change_origin: Arc<dyn ClipboardChangeOriginPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            history_repo,
            history_events,
            clipboard,
            change_origin,
            clock,
            origin_ttl: DEFAULT_RESTORE_ORIGIN_TTL,
        }
    }

    /// The marker has to outlive at least one watcher poll.
    pub fn with_origin_ttl(mut self, origin_ttl: Duration) -> Self {
        self.origin_ttl = origin_ttl;
        self
    }

    /// Returns the promoted record under its new key.
    pub async fn execute(&self, key: ClipKey) -> Result<CopiedContent, RestoreError> {
        let span = info_span!("usecase.restore_history_entry.execute", key = %key);

        async {
            let item = self
                .history_repo
                .get(key)
                .await?
                .ok_or(RestoreError::NotFound(key))?;

            self.change_origin
                .set_next_origin(
                    content_hash(&item.content),
                    ClipboardChangeOrigin::LocalRestore,
                    self.origin_ttl,
                )
                .await;

            let clipboard = Arc::clone(&self.clipboard);
            let text = item.content.clone();
            tokio::task::spawn_blocking(move || clipboard.write_text(&text))
                .await
                .context("Clipboard write task failed")?
                .context("Failed to write system clipboard")?;

            let promoted = self
                .history_repo
                .promote(key, self.clock.now_ms())
                .await
                .context("Failed to promote restored item")?
                .ok_or(RestoreError::NotFound(key))?;

            let content = promoted.to_copied_content();
            self.history_events.emit(HistoryEvent::removed(key))?;
            self.history_events
                .emit(HistoryEvent::new_content(content.clone()))?;

            info!(old_key = %key, new_key = %promoted.key, "Restored history item");
            Ok(content)
        }
        .instrument(span)
        .await
    }
}
