//! Dependency wiring
//!
//! The only place that names concrete adapters. Everything downstream sees
//! ports through [`AppDeps`].

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context};
use gc_app::usecases::{CaptureClipboardChange, RecordCopiedContent};
use gc_app::{AppDeps, AppPaths, BroadcastHistoryEvents};
use gc_core::config::AppConfig;
use gc_core::ports::{
    ClipboardChangeOriginPort, ClockPort, HistoryRepositoryPort, SystemClipboardPort,
};
use gc_infra::db::executor::DieselSqliteExecutor;
use gc_infra::db::mappers::HistoryRowMapper;
use gc_infra::db::pool::init_db_pool;
use gc_infra::db::repositories::{DieselClipboardChangeOrigin, DieselHistoryRepository};
use gc_infra::SystemClock;
use gc_platform::clipboard::ClipboardRsAdapter;
use gc_platform::runtime::PollingWatcherControl;
use tracing::info;

use super::runtime::AppRuntime;

/// Pick the database file: explicit override, then config, then the default
/// location under the data directory.
pub fn resolve_db_path(config: &AppConfig, paths: &AppPaths, db_override: Option<&Path>) -> PathBuf {
    db_override
        .map(Path::to_path_buf)
        .or_else(|| config.storage.database_path.clone())
        .unwrap_or_else(|| paths.db_path.clone())
}

pub fn wire_dependencies(
    config: AppConfig,
    paths: &AppPaths,
    db_override: Option<&Path>,
) -> anyhow::Result<AppRuntime> {
    let db_path = resolve_db_path(&config, paths, db_override);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create database directory: {}", parent.display())
        })?;
    }
    let db_url = db_path
        .to_str()
        .ok_or_else(|| anyhow!("Database path is not valid UTF-8: {}", db_path.display()))?;
    let pool = init_db_pool(db_url)
        .with_context(|| format!("Failed to open history database: {}", db_path.display()))?;
    info!(path = %db_path.display(), "History database ready");

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let history_repo: Arc<dyn HistoryRepositoryPort> = Arc::new(DieselHistoryRepository::new(
        DieselSqliteExecutor::new(pool.clone()),
        HistoryRowMapper,
    ));
    // Shared with other gclip processes on the same database, so a `restore`
    // run from the CLI is not recaptured by a running `watch`.
    let change_origin: Arc<dyn ClipboardChangeOriginPort> = Arc::new(
        DieselClipboardChangeOrigin::new(DieselSqliteExecutor::new(pool), clock.clone()),
    );
    let events = BroadcastHistoryEvents::new();
    let clipboard: Arc<dyn SystemClipboardPort> = Arc::new(ClipboardRsAdapter::new());

    let deps = AppDeps {
        clipboard: clipboard.clone(),
        change_origin: change_origin.clone(),
        history_repo: history_repo.clone(),
        history_events: Arc::new(events.clone()),
        clock,
    };

    let capture = CaptureClipboardChange::new(
        RecordCopiedContent::new(
            history_repo,
            deps.history_events.clone(),
            deps.clock.clone(),
            config.storage.max_history_items,
        ),
        change_origin,
    );
    let watcher_control = Arc::new(PollingWatcherControl::new(
        clipboard,
        Arc::new(capture),
        Duration::from_millis(config.watcher.poll_interval_ms),
    ));

    Ok(AppRuntime::new(deps, config, events, watcher_control))
}
