use std::path::PathBuf;

use gc_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "gclip";

/// `GCLIP_PROFILE=dev` gives `gclip-dev`, so a second profile never shares
/// a database with the default one.
fn app_dir_name(profile: Option<&str>) -> String {
    match profile {
        Some(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

fn resolved_app_dir_name() -> String {
    app_dir_name(std::env::var("GCLIP_PROFILE").ok().as_deref())
}

pub struct DirsAppDirsAdapter {
    base_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base_dir_override: None,
        }
    }

    /// Resolve both the data and the config root under `base` instead of the
    /// platform directories.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_dir_override: Some(base),
        }
    }

    fn base_data_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }

    fn base_config_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_dir_override {
            return Some(base.clone());
        }
        dirs::config_dir()
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_dir()
            .ok_or(AppDirsError::DataDirUnavailable)?;
        let base_config = self
            .base_config_dir()
            .ok_or(AppDirsError::ConfigDirUnavailable)?;
        let app_dir_name = resolved_app_dir_name();

        Ok(AppDirs {
            app_data_root: base_data.join(&app_dir_name),
            app_config_root: base_config.join(&app_dir_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_suffixes_directory_name() {
        assert_eq!(app_dir_name(None), "gclip");
        assert_eq!(app_dir_name(Some("")), "gclip");
        assert_eq!(app_dir_name(Some("dev")), "gclip-dev");
    }

    #[test]
    fn base_override_roots_both_directories() {
        let adapter = DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp/gclip-test"));
        let dirs = adapter.get_app_dirs().unwrap();

        assert!(dirs.app_data_root.starts_with("/tmp/gclip-test"));
        assert!(dirs.app_config_root.starts_with("/tmp/gclip-test"));
    }
}
