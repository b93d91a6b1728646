//! In-process delivery of [`HistoryEvent`]s.

use gc_core::ports::HistoryEventPort;
use gc_core::HistoryEvent;
use tokio::sync::broadcast;
use tracing::trace;

const DEFAULT_CAPACITY: usize = 256;

/// Fans history events out to any number of subscribers.
///
/// Emitting while nobody is subscribed is fine; the event is dropped. A
/// subscriber that falls more than the channel capacity behind sees
/// `RecvError::Lagged` and skips ahead.
#[derive(Debug, Clone)]
pub struct BroadcastHistoryEvents {
    tx: broadcast::Sender<HistoryEvent>,
}

impl BroadcastHistoryEvents {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<HistoryEvent> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastHistoryEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryEventPort for BroadcastHistoryEvents {
    fn emit(&self, event: HistoryEvent) -> anyhow::Result<()> {
        let name = event.name();
        match self.tx.send(event) {
            Ok(receivers) => trace!(event = name, receivers, "History event emitted"),
            Err(_) => trace!(event = name, "History event dropped, no subscribers"),
        }
        Ok(())
    }
}
