//! Dependency grouping for the application runtime.
//!
//! Plain parameter grouping: every port is required and nothing here has
//! behaviour of its own.

use std::sync::Arc;

use gc_core::ports::{
    ClipboardChangeOriginPort, ClockPort, HistoryEventPort, HistoryRepositoryPort,
    SystemClipboardPort,
};

pub struct AppDeps {
    // Clipboard
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub change_origin: Arc<dyn ClipboardChangeOriginPort>,

    // History
    pub history_repo: Arc<dyn HistoryRepositoryPort>,
    pub history_events: Arc<dyn HistoryEventPort>,

    // System
    pub clock: Arc<dyn ClockPort>,
}
