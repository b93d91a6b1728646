use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("data directory is not available on this platform")]
    DataDirUnavailable,

    #[error("config directory is not available on this platform")]
    ConfigDirUnavailable,
}
