use anyhow::Result;

use crate::HistoryEvent;

/// Delivers history change notifications to whoever is listening.
pub trait HistoryEventPort: Send + Sync {
    /// Publish an event. Having no listeners is not an error.
    fn emit(&self, event: HistoryEvent) -> Result<()>;
}
