//! Application configuration domain model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MAX_HISTORY_ITEMS: usize = 200;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("storage.max_history_items must be greater than zero")]
    ZeroHistoryLimit,

    #[error("watcher.poll_interval_ms must be greater than zero")]
    ZeroPollInterval,
}

/// Application configuration, read from `config.toml`.
///
/// Every section and key is optional; anything missing takes its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub watcher: WatcherConfig,
}

/// `[storage]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Maximum number of clipboard history items to keep
    pub max_history_items: usize,
    /// Overrides the default database location under the data directory
    pub database_path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_history_items: DEFAULT_MAX_HISTORY_ITEMS,
            database_path: None,
        }
    }
}

/// `[watcher]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatcherConfig {
    /// How often the system clipboard is polled
    pub poll_interval_ms: u64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl AppConfig {
    /// Map a parsed TOML document onto the config model and validate it.
    pub fn from_toml(value: &toml::Value) -> anyhow::Result<Self> {
        let config: AppConfig = value.clone().try_into()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.max_history_items == 0 {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        if self.watcher.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}
