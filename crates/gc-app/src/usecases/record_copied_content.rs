//! Use case for appending copied text to the history

use std::sync::Arc;

use anyhow::{Context, Result};
use gc_core::ports::{ClockPort, HistoryEventPort, HistoryRepositoryPort};
use gc_core::{CopiedContent, HistoryEvent};
use tracing::{debug, info, info_span, Instrument};

/// Appends text to the history, announces it, then enforces the history
/// limit by evicting the oldest items.
///
/// Emits `new-content` for the appended item, followed by one
/// `remove-content` per evicted key, oldest first. Empty text is ignored.
pub struct RecordCopiedContent {
    history_repo: Arc<dyn HistoryRepositoryPort>,
    history_events: Arc<dyn HistoryEventPort>,
    clock: Arc<dyn ClockPort>,
    max_history_items: usize,
}

impl RecordCopiedContent {
    pub fn new(
        history_repo: Arc<dyn HistoryRepositoryPort>,
        history_events: Arc<dyn HistoryEventPort>,
        clock: Arc<dyn ClockPort>,
        max_history_items: usize,
    ) -> Self {
        Self {
            history_repo,
            history_events,
            clock,
            max_history_items,
        }
    }

    /// Returns the stored record, or `None` when `text` was empty.
    pub async fn execute(&self, text: &str) -> Result<Option<CopiedContent>> {
        let span = info_span!("usecase.record_copied_content.execute", len = text.len());

        async {
            if text.is_empty() {
                debug!("Ignoring empty clipboard text");
                return Ok(None);
            }

            let item = self
                .history_repo
                .append(text, self.clock.now_ms())
                .await
                .context("Failed to append history item")?;
            let content = item.to_copied_content();
            self.history_events
                .emit(HistoryEvent::new_content(content.clone()))?;

            let evicted = self
                .history_repo
                .trim_to(self.max_history_items)
                .await
                .context("Failed to trim history")?;
            for key in &evicted {
                self.history_events.emit(HistoryEvent::removed(*key))?;
            }

            info!(key = %item.key, evicted = evicted.len(), "Recorded copied content");
            Ok(Some(content))
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::{MemoryHistoryRepo, RecordingEvents, StepClock};
    use gc_core::ClipKey;

    fn use_case(
        max: usize,
    ) -> (
        Arc<MemoryHistoryRepo>,
        Arc<RecordingEvents>,
        RecordCopiedContent,
    ) {
        let repo = Arc::new(MemoryHistoryRepo::default());
        let events = Arc::new(RecordingEvents::default());
        let uc = RecordCopiedContent::new(
            repo.clone(),
            events.clone(),
            Arc::new(StepClock::default()),
            max,
        );
        (repo, events, uc)
    }

    #[tokio::test]
    async fn records_text_and_emits_new_content() {
        let (repo, events, uc) = use_case(10);

        let content = uc.execute("hello").await.unwrap();

        assert_eq!(content, Some(CopiedContent::new(1, "hello")));
        assert_eq!(repo.contents(), vec!["hello"]);
        assert_eq!(
            events.take(),
            vec![HistoryEvent::new_content(CopiedContent::new(1, "hello"))]
        );
    }

    #[tokio::test]
    async fn empty_text_is_ignored() {
        let (repo, events, uc) = use_case(10);

        assert_eq!(uc.execute("").await.unwrap(), None);
        assert!(repo.contents().is_empty());
        assert!(events.take().is_empty());
    }

    #[tokio::test]
    async fn history_limit_evicts_oldest_and_announces_it() {
        let (repo, events, uc) = use_case(2);

        for text in ["one", "two", "three", "four"] {
            uc.execute(text).await.unwrap();
        }

        assert_eq!(repo.contents(), vec!["three", "four"]);
        let removed: Vec<HistoryEvent> = events
            .take()
            .into_iter()
            .filter(|e| matches!(e, HistoryEvent::RemoveContent { .. }))
            .collect();
        assert_eq!(
            removed,
            vec![HistoryEvent::removed(ClipKey(1)), HistoryEvent::removed(ClipKey(2))]
        );
    }

    #[tokio::test]
    async fn new_content_precedes_eviction() {
        let (_repo, events, uc) = use_case(1);

        uc.execute("old").await.unwrap();
        events.take();
        uc.execute("new").await.unwrap();

        let names: Vec<&str> = events.take().iter().map(HistoryEvent::name).collect();
        assert_eq!(names, vec!["new-content", "remove-content"]);
    }

    #[tokio::test]
    async fn repository_errors_propagate() {
        let events = Arc::new(RecordingEvents::default());
        let uc = RecordCopiedContent::new(
            Arc::new(MemoryHistoryRepo::failing()),
            events.clone(),
            Arc::new(StepClock::default()),
            10,
        );

        assert!(uc.execute("boom").await.is_err());
        assert!(events.take().is_empty());
    }
}
