use std::sync::Arc;

use gc_core::ports::{WatcherControlError, WatcherControlPort};
use tracing::{info, info_span, Instrument};

/// Stops clipboard monitoring. Stopping a watcher that is not running is a
/// no-op.
pub struct StopClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StopClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), WatcherControlError> {
        let span = info_span!("usecase.stop_clipboard_watcher.execute");

        async {
            info!("Stopping clipboard watcher");
            self.watcher_control.stop_watcher().await
        }
        .instrument(span)
        .await
    }
}
