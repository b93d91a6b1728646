//! Clipboard watcher runtime module
//!
//! The watcher is an event source: it polls the system clipboard through
//! [`SystemClipboardPort`], detects meaningful changes by hashing the text,
//! and sends [`PlatformEvent::ClipboardChanged`] into a channel. It makes no
//! business decisions; whether a change is stored is up to the handler on
//! the other end.
//!
//! ```text
//! System clipboard
//!      ↓
//! SystemClipboardPort
//!      ↓
//! ClipboardWatcher   (this module)
//!      ↓
//! PlatformEvent
//!      ↓
//! ClipboardChangeHandler
//! ```
//!
//! Identical consecutive contents are ignored. Whatever the clipboard holds
//! when the watcher starts counts as already seen.

use anyhow::Result;
use gc_core::content_hash;
use gc_core::ports::SystemClipboardPort;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::ipc::PlatformEvent;

pub struct ClipboardWatcher {
    clipboard: Arc<dyn SystemClipboardPort>,
    tx: mpsc::Sender<PlatformEvent>,
    last_hash: Mutex<Option<String>>,
}

impl ClipboardWatcher {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, tx: mpsc::Sender<PlatformEvent>) -> Self {
        Self {
            clipboard,
            tx,
            last_hash: Mutex::new(None),
        }
    }

    async fn read_text(&self) -> Result<Option<String>> {
        let clipboard = Arc::clone(&self.clipboard);
        let text = tokio::task::spawn_blocking(move || clipboard.read_text()).await??;
        Ok(text)
    }

    /// Mark the current clipboard content as seen without emitting an event.
    pub async fn prime(&self) -> Result<()> {
        if let Some(text) = self.read_text().await? {
            *self.last_hash.lock().await = Some(content_hash(&text));
        }
        Ok(())
    }

    /// Check clipboard once.
    ///
    /// Returns `true` if a change was detected and sent.
    pub async fn check_once(&self) -> Result<bool> {
        let Some(text) = self.read_text().await? else {
            return Ok(false);
        };

        let hash = content_hash(&text);
        {
            let mut last = self.last_hash.lock().await;
            if last.as_deref() == Some(hash.as_str()) {
                return Ok(false);
            }
            *last = Some(hash);
        }

        debug!(len = text.len(), "Clipboard change detected");
        self.tx.send(PlatformEvent::ClipboardChanged { text }).await?;
        Ok(true)
    }

    /// Poll until `cancel` fires or the receiving side is dropped.
    ///
    /// Read failures are logged and polling continues.
    pub async fn run(self, poll_interval: Duration, cancel: CancellationToken) {
        if let Err(err) = self.prime().await {
            warn!(error = %err, "Failed to read initial clipboard content");
        }

        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    if let Err(err) = self.check_once().await {
                        if self.tx.is_closed() {
                            break;
                        }
                        warn!(error = %err, "Clipboard poll failed");
                    }
                }
            }
        }

        debug!("Clipboard poll loop exited");
    }
}
