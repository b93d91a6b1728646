//! Bridges clipboard-change notifications from the platform layer into the
//! history.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use gc_core::ports::{ClipboardChangeHandler, ClipboardChangeOriginPort};
use gc_core::{content_hash, ClipboardChangeOrigin};
use tracing::debug;

use super::RecordCopiedContent;

/// Records local clipboard copies.
///
/// Changes carrying a pending [`ClipboardChangeOrigin::LocalRestore`] marker
/// were written by a restore and are skipped; the marker is consumed.
pub struct CaptureClipboardChange {
    record: RecordCopiedContent,
    change_origin: Arc<dyn ClipboardChangeOriginPort>,
}

impl CaptureClipboardChange {
    pub fn new(
        record: RecordCopiedContent,
        change_origin: Arc<dyn ClipboardChangeOriginPort>,
    ) -> Self {
        Self {
            record,
            change_origin,
        }
    }
}

#[async_trait]
impl ClipboardChangeHandler for CaptureClipboardChange {
    async fn on_clipboard_changed(&self, text: String) -> Result<()> {
        let origin = self
            .change_origin
            .consume_origin_or_default(&content_hash(&text), ClipboardChangeOrigin::LocalCapture)
            .await;

        if origin == ClipboardChangeOrigin::LocalRestore {
            debug!("Skipping clipboard change written by restore");
            return Ok(());
        }

        self.record.execute(&text).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::{MemoryHistoryRepo, QueuedOrigins, RecordingEvents, StepClock};
    use std::time::Duration;

    fn handler() -> (Arc<MemoryHistoryRepo>, Arc<QueuedOrigins>, CaptureClipboardChange) {
        let repo = Arc::new(MemoryHistoryRepo::default());
        let origins = Arc::new(QueuedOrigins::default());
        let record = RecordCopiedContent::new(
            repo.clone(),
            Arc::new(RecordingEvents::default()),
            Arc::new(StepClock::default()),
            10,
        );
        (repo, origins.clone(), CaptureClipboardChange::new(record, origins))
    }

    #[tokio::test]
    async fn local_copies_are_recorded() {
        let (repo, _origins, handler) = handler();

        handler.on_clipboard_changed("copied".into()).await.unwrap();

        assert_eq!(repo.contents(), vec!["copied"]);
    }

    #[tokio::test]
    async fn restored_content_is_skipped_once() {
        let (repo, origins, handler) = handler();
        origins
            .set_next_origin(
                content_hash("restored"),
                ClipboardChangeOrigin::LocalRestore,
                Duration::from_secs(1),
            )
            .await;

        handler.on_clipboard_changed("restored".into()).await.unwrap();
        assert!(repo.contents().is_empty());
        assert!(origins.pending().is_empty());

        handler.on_clipboard_changed("restored".into()).await.unwrap();
        assert_eq!(repo.contents(), vec!["restored"]);
    }

    #[tokio::test]
    async fn marker_for_other_content_does_not_suppress() {
        let (repo, origins, handler) = handler();
        origins
            .set_next_origin(
                content_hash("something else"),
                ClipboardChangeOrigin::LocalRestore,
                Duration::from_secs(1),
            )
            .await;

        handler.on_clipboard_changed("fresh copy".into()).await.unwrap();

        assert_eq!(repo.contents(), vec!["fresh copy"]);
        assert_eq!(origins.pending().len(), 1);
    }
}
