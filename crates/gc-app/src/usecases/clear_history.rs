use std::sync::Arc;

use anyhow::Result;
use gc_core::ports::{HistoryEventPort, HistoryRepositoryPort};
use gc_core::HistoryEvent;
use tracing::{info, info_span, Instrument};

/// Removes every history item and emits `history-cleared`.
pub struct ClearHistory {
    history_repo: Arc<dyn HistoryRepositoryPort>,
    history_events: Arc<dyn HistoryEventPort>,
}

impl ClearHistory {
    pub fn new(
        history_repo: Arc<dyn HistoryRepositoryPort>,
        history_events: Arc<dyn HistoryEventPort>,
    ) -> Self {
        Self {
            history_repo,
            history_events,
        }
    }

    /// Returns the number of items removed.
    pub async fn execute(&self) -> Result<usize> {
        let span = info_span!("usecase.clear_history.execute");

        async {
            let removed = self.history_repo.clear().await?;
            self.history_events
                .emit(HistoryEvent::HistoryCleared { removed })?;
            info!(removed, "Cleared history");
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
    async fn clears_everything_and_reports_count() {
        let repo = Arc::new(MemoryHistoryRepo::default());
        let events = Arc::new(RecordingEvents::default());
        for text in ["a", "b", "c"] {
            repo.append(text, 0).await.unwrap();
        }

        let removed = ClearHistory::new(repo.clone(), events.clone())
            .execute()
            .await
            .unwrap();

        assert_eq!(removed, 3);
        assert!(repo.contents().is_empty());
        assert_eq!(events.take(), vec![HistoryEvent::HistoryCleared { removed: 3 }]);
    }

    #[tokio::test]
    async fn clearing_empty_history_still_emits() {
        let events = Arc::new(RecordingEvents::default());
        let uc = ClearHistory::new(Arc::new(MemoryHistoryRepo::default()), events.clone());

        assert_eq!(uc.execute().await.unwrap(), 0);
        assert_eq!(events.take(), vec![HistoryEvent::HistoryCleared { removed: 0 }]);
    }
}
