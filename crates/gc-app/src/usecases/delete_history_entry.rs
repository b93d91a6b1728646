use std::sync::Arc;

use anyhow::Result;
use gc_core::ports::{HistoryEventPort, HistoryRepositoryPort};
use gc_core::{ClipKey, HistoryEvent};
use tracing::{info, info_span, Instrument};

/// Removes one history item and emits `remove-content` for it.
pub struct DeleteHistoryEntry {
    history_repo: Arc<dyn HistoryRepositoryPort>,
    history_events: Arc<dyn HistoryEventPort>,
}

impl DeleteHistoryEntry {
    pub fn new(
        history_repo: Arc<dyn HistoryRepositoryPort>,
        history_events: Arc<dyn HistoryEventPort>,
    ) -> Self {
        Self {
            history_repo,
            history_events,
        }
    }

    /// Returns `false` when no item had that key; nothing is emitted then.
    pub async fn execute(&self, key: ClipKey) -> Result<bool> {
        let span = info_span!("usecase.delete_history_entry.execute", key = %key);

        async {
            let removed = self.history_repo.remove(key).await?;
            if removed {
                self.history_events.emit(HistoryEvent::removed(key))?;
                info!(key = %key, "Deleted history item");
            }
            Ok(removed)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::{MemoryHistoryRepo, RecordingEvents};

    #[tokio::test]
    async fn deletes_item_and_emits_remove_content() {
        let repo = Arc::new(MemoryHistoryRepo::default());
        let events = Arc::new(RecordingEvents::default());
        repo.append("a", 0).await.unwrap();
        repo.append("b", 0).await.unwrap();

        let uc = DeleteHistoryEntry::new(repo.clone(), events.clone());

        assert!(uc.execute(ClipKey(1)).await.unwrap());
        assert_eq!(repo.contents(), vec!["b"]);
        assert_eq!(events.take(), vec![HistoryEvent::RemoveContent { index: 1 }]);
    }

    #[tokio::test]
    async fn unknown_key_reports_false_without_event() {
        let events = Arc::new(RecordingEvents::default());
        let uc = DeleteHistoryEntry::new(Arc::new(MemoryHistoryRepo::default()), events.clone());

        assert!(!uc.execute(ClipKey(7)).await.unwrap());
        assert!(events.take().is_empty());
    }
}
