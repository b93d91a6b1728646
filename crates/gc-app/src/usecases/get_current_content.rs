use std::sync::Arc;

use anyhow::Result;
use gc_core::ports::HistoryRepositoryPort;
use gc_core::CopiedContent;
use tracing::{info_span, Instrument};

/// Returns the newest history record, if any.
pub struct GetCurrentContent {
    history_repo: Arc<dyn HistoryRepositoryPort>,
}

impl GetCurrentContent {
    pub fn new(history_repo: Arc<dyn HistoryRepositoryPort>) -> Self {
        Self { history_repo }
    }

    pub async fn execute(&self) -> Result<Option<CopiedContent>> {
        let span = info_span!("usecase.get_current_content.execute");

        async {
            let latest = self.history_repo.latest().await?;
            Ok(latest.map(CopiedContent::from))
        }
        .instrument(span)
        .await
    }
}
