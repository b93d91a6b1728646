use async_trait::async_trait;

/// Port for controlling the clipboard watcher lifecycle.
///
/// Both operations are idempotent: starting a running watcher or stopping a
/// stopped one succeeds without effect.
#[async_trait]
pub trait WatcherControlPort: Send + Sync {
    async fn start_watcher(&self) -> Result<(), WatcherControlError>;

    async fn stop_watcher(&self) -> Result<(), WatcherControlError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WatcherControlError {
    #[error("Failed to start clipboard watcher: {0}")]
    StartFailed(String),

    #[error("Failed to stop clipboard watcher: {0}")]
    StopFailed(String),
}
