//! Use case for starting the clipboard watcher

use std::sync::Arc;

use gc_core::ports::{WatcherControlError, WatcherControlPort};
use tracing::{info, info_span, Instrument};

#[derive(Debug, thiserror::Error)]
pub enum StartClipboardWatcherError {
    #[error("{0}")]
    StartFailed(String),
}

impl From<WatcherControlError> for StartClipboardWatcherError {
    fn from(err: WatcherControlError) -> Self {
        StartClipboardWatcherError::StartFailed(err.to_string())
    }
}

/// Starts clipboard monitoring. Starting a watcher that already runs is a
/// no-op.
pub struct StartClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StartClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), StartClipboardWatcherError> {
        let span = info_span!("usecase.start_clipboard_watcher.execute");

        async {
            info!("Starting clipboard watcher");

            self.watcher_control.start_watcher().await?;

            Ok(())
        }
        .instrument(span)
        .await
    }
}
