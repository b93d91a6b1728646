use std::path::PathBuf;

/// Resolved per-user application directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Holds the history database and logs.
    pub app_data_root: PathBuf,
    /// Holds `config.toml`.
    pub app_config_root: PathBuf,
}
