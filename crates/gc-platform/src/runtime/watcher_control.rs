use async_trait::async_trait;
use gc_core::ports::{
    ClipboardChangeHandler, SystemClipboardPort, WatcherControlError, WatcherControlPort,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::ipc::PlatformEvent;
use crate::runtime::watcher::ClipboardWatcher;

const EVENT_BUFFER: usize = 64;

/// Runs a [`ClipboardWatcher`] on the current tokio runtime and forwards its
/// events to a [`ClipboardChangeHandler`].
pub struct PollingWatcherControl {
    clipboard: Arc<dyn SystemClipboardPort>,
    handler: Arc<dyn ClipboardChangeHandler>,
    poll_interval: Duration,
    running: Mutex<Option<RunningWatcher>>,
}

struct RunningWatcher {
    cancel: CancellationToken,
    watcher_task: JoinHandle<()>,
    dispatch_task: JoinHandle<()>,
}

impl PollingWatcherControl {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        handler: Arc<dyn ClipboardChangeHandler>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            clipboard,
            handler,
            poll_interval,
            running: Mutex::new(None),
        }
    }

    pub async fn is_running(&self) -> bool {
        self.running.lock().await.is_some()
    }
}

#[async_trait]
impl WatcherControlPort for PollingWatcherControl {
    async fn start_watcher(&self) -> Result<(), WatcherControlError> {
        let mut running = self.running.lock().await;
        if running.is_some() {
            debug!("Clipboard watcher already running");
            return Ok(());
        }

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| WatcherControlError::StartFailed(e.to_string()))?;

        let (tx, mut rx) = mpsc::channel(EVENT_BUFFER);
        let cancel = CancellationToken::new();

        let watcher = ClipboardWatcher::new(Arc::clone(&self.clipboard), tx);
        let watcher_task = runtime.spawn(watcher.run(self.poll_interval, cancel.clone()));

        let handler = Arc::clone(&self.handler);
        let dispatch_task = runtime.spawn(async move {
            while let Some(event) = rx.recv().await {
                match event {
                    PlatformEvent::ClipboardChanged { text } => {
                        if let Err(err) = handler.on_clipboard_changed(text).await {
                            error!(error = %err, "Failed to handle clipboard change");
                        }
                    }
                }
            }
        });

        *running = Some(RunningWatcher {
            cancel,
            watcher_task,
            dispatch_task,
        });
        info!(poll_interval_ms = self.poll_interval.as_millis() as u64, "Clipboard watcher started");
        Ok(())
    }

    async fn stop_watcher(&self) -> Result<(), WatcherControlError> {
        let Some(running) = self.running.lock().await.take() else {
            return Ok(());
        };

        running.cancel.cancel();
        running
            .watcher_task
            .await
            .map_err(|e| WatcherControlError::StopFailed(e.to_string()))?;
        // The dispatcher drains what is left and ends once the watcher drops its sender.
        running
            .dispatch_task
            .await
            .map_err(|e| WatcherControlError::StopFailed(e.to_string()))?;

        info!("Clipboard watcher stopped");
        Ok(())
    }
}
