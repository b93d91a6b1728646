//! In-memory port doubles shared by the use case unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use gc_core::ports::{
    ClipboardChangeOriginPort, ClockPort, HistoryEventPort, HistoryRepositoryPort,
    SystemClipboardPort,
};
use gc_core::{ClipKey, ClipboardChangeOrigin, ClipboardItem, HistoryEvent};

#[derive(Default)]
pub struct MemoryHistoryRepo {
    state: Mutex<RepoState>,
}

#[derive(Default)]
struct RepoState {
    last_key: u64,
    items: Vec<ClipboardItem>,
    fail_appends: bool,
}

impl MemoryHistoryRepo {
    pub fn failing() -> Self {
        let repo = Self::default();
        repo.fail_appends(true);
        repo
    }

    pub fn fail_appends(&self, fail: bool) {
        self.state.lock().unwrap().fail_appends = fail;
    }

    pub fn keys(&self) -> Vec<ClipKey> {
        self.state
            .lock()
            .unwrap()
            .items
            .iter()
            .map(|item| item.key)
            .collect()
    }

    pub fn contents(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .items
            .iter()
            .map(|item| item.content.clone())
            .collect()
    }
}

#[async_trait]
impl HistoryRepositoryPort for MemoryHistoryRepo {
    async fn append(&self, content: &str, captured_at_ms: i64) -> anyhow::Result<ClipboardItem> {
        let mut state = self.state.lock().unwrap();
        if state.fail_appends {
            anyhow::bail!("mock append failure");
        }
        state.last_key += 1;
        let item = ClipboardItem::new(ClipKey(state.last_key), content, captured_at_ms);
        state.items.push(item.clone());
        Ok(item)
    }

    async fn list_newest_first(&self) -> anyhow::Result<Vec<ClipboardItem>> {
        let mut items = self.state.lock().unwrap().items.clone();
        items.reverse();
        Ok(items)
    }

    async fn latest(&self) -> anyhow::Result<Option<ClipboardItem>> {
        Ok(self.state.lock().unwrap().items.last().cloned())
    }

    async fn get(&self, key: ClipKey) -> anyhow::Result<Option<ClipboardItem>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .items
            .iter()
            .find(|item| item.key == key)
            .cloned())
    }

    async fn remove(&self, key: ClipKey) -> anyhow::Result<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.items.len();
        state.items.retain(|item| item.key != key);
        Ok(state.items.len() != before)
    }

    async fn promote(
        &self,
        key: ClipKey,
        captured_at_ms: i64,
    ) -> anyhow::Result<Option<ClipboardItem>> {
        let mut state = self.state.lock().unwrap();
        let Some(pos) = state.items.iter().position(|item| item.key == key) else {
            return Ok(None);
        };
        if state.fail_appends {
            anyhow::bail!("mock promote failure");
        }
        let old = state.items.remove(pos);
        state.last_key += 1;
        let item = ClipboardItem::new(ClipKey(state.last_key), old.content, captured_at_ms);
        state.items.push(item.clone());
        Ok(Some(item))
    }

    async fn trim_to(&self, max_items: usize) -> anyhow::Result<Vec<ClipKey>> {
        let mut state = self.state.lock().unwrap();
        let excess = state.items.len().saturating_sub(max_items);
        Ok(state.items.drain(..excess).map(|item| item.key).collect())
    }

    async fn clear(&self) -> anyhow::Result<usize> {
        let mut state = self.state.lock().unwrap();
        let removed = state.items.len();
        state.items.clear();
        Ok(removed)
    }

    async fn count(&self) -> anyhow::Result<usize> {
        Ok(self.state.lock().unwrap().items.len())
    }
}

#[derive(Default)]
pub struct RecordingEvents {
    events: Mutex<Vec<HistoryEvent>>,
}

impl RecordingEvents {
    pub fn take(&self) -> Vec<HistoryEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl HistoryEventPort for RecordingEvents {
    fn emit(&self, event: HistoryEvent) -> anyhow::Result<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

/// Clock that advances one millisecond per reading.
#[derive(Default)]
pub struct StepClock {
    now: AtomicI64,
}

impl ClockPort for StepClock {
    fn now_ms(&self) -> i64 {
        self.now.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[derive(Default)]
pub struct MemoryClipboard {
    text: Mutex<Option<String>>,
    fail_writes: bool,
}

impl MemoryClipboard {
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn text(&self) -> Option<String> {
        self.text.lock().unwrap().clone()
    }
}

impl SystemClipboardPort for MemoryClipboard {
    fn read_text(&self) -> anyhow::Result<Option<String>> {
        Ok(self.text())
    }

    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        if self.fail_writes {
            anyhow::bail!("mock clipboard write failure");
        }
        *self.text.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

/// Origin markers without expiry, consumed in insertion order.
#[derive(Default)]
pub struct QueuedOrigins {
    marks: Mutex<VecDeque<(String, ClipboardChangeOrigin)>>,
}

impl QueuedOrigins {
    pub fn pending(&self) -> Vec<(String, ClipboardChangeOrigin)> {
        self.marks.lock().unwrap().iter().cloned().collect()
    }
}

#[async_trait]
impl ClipboardChangeOriginPort for QueuedOrigins {
    async fn set_next_origin(
        &self,
        content_hash: String,
        origin: ClipboardChangeOrigin,
        _ttl: Duration,
    ) {
        self.marks.lock().unwrap().push_back((content_hash, origin));
    }

    async fn consume_origin_or_default(
        &self,
        content_hash: &str,
        default_origin: ClipboardChangeOrigin,
    ) -> ClipboardChangeOrigin {
        let mut marks = self.marks.lock().unwrap();
        match marks.iter().position(|(hash, _)| hash == content_hash) {
            Some(pos) => marks.remove(pos).map_or(default_origin, |(_, origin)| origin),
            None => default_origin,
        }
    }
}
