//! Configuration loader
//!
//! Reads the TOML file and maps it onto [`AppConfig`]. Range checks live in
//! the model; this module only adds file context to errors.

use std::path::Path;

use anyhow::Context;
use gc_core::config::AppConfig;
use tracing::debug;

/// A missing file yields the default configuration.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        debug!(path = %config_path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))?;
    AppConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config: {}", config_path.display()))
}
