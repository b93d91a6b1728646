use anyhow::Result;
use async_trait::async_trait;

use crate::{ClipKey, ClipboardItem};

/// Persistence of the clipboard history.
///
/// Conventions:
/// - keys come from a sequence owned by the store; they only increase and
///   are never handed out twice, even after `remove` or `clear`
/// - listing is ordered newest first
#[async_trait]
pub trait HistoryRepositoryPort: Send + Sync {
    /// Store `content` under the next key.
    async fn append(&self, content: &str, captured_at_ms: i64) -> Result<ClipboardItem>;

    async fn list_newest_first(&self) -> Result<Vec<ClipboardItem>>;

    async fn latest(&self) -> Result<Option<ClipboardItem>>;

    async fn get(&self, key: ClipKey) -> Result<Option<ClipboardItem>>;

    /// Returns `false` if no item had that key.
    async fn remove(&self, key: ClipKey) -> Result<bool>;

    /// Move an item to the newest position under a fresh key.
    ///
    /// Removal and re-insertion happen atomically: on error the item keeps
    /// its old key. Returns `None` if no item had that key.
    async fn promote(&self, key: ClipKey, captured_at_ms: i64) -> Result<Option<ClipboardItem>>;

    /// Delete the oldest items until at most `max_items` remain.
    ///
    /// Returns the removed keys, oldest first.
    async fn trim_to(&self, max_items: usize) -> Result<Vec<ClipKey>>;

    /// Delete every item, returning how many were removed.
    async fn clear(&self) -> Result<usize>;

    async fn count(&self) -> Result<usize>;
}
