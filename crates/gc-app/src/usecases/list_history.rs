use std::sync::Arc;

use anyhow::Result;
use gc_core::ports::HistoryRepositoryPort;
use gc_core::CopiedContent;
use tracing::{debug, info_span, Instrument};

/// Lists history records, newest first.
pub struct ListHistory {
    history_repo: Arc<dyn HistoryRepositoryPort>,
}

impl ListHistory {
    pub fn new(history_repo: Arc<dyn HistoryRepositoryPort>) -> Self {
        Self { history_repo }
    }

    /// `limit` caps the number of records returned. An empty history yields
    /// an empty list.
    pub async fn execute(&self, limit: Option<usize>) -> Result<Vec<CopiedContent>> {
        let span = info_span!("usecase.list_history.execute", limit = ?limit);

        async {
            let items = self.history_repo.list_newest_first().await?;
            let records: Vec<CopiedContent> = items
                .iter()
                .take(limit.unwrap_or(usize::MAX))
                .map(CopiedContent::from)
                .collect();
            debug!(count = records.len(), "Listed history");
            Ok(records)
        }
        .instrument(span)
        .await
    }
}
