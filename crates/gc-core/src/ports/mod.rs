//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `gc-app` and the
//! implementations in `gc-infra` and `gc-platform`, so the domain never
//! depends on SQLite, clipboard libraries or the filesystem directly.

pub mod app_dirs;
mod clipboard_change_handler;
mod clipboard_change_origin;
mod clock;
pub mod errors;
mod history_event;
mod history_repository;
mod system_clipboard;
pub mod watcher_control;

pub use app_dirs::AppDirsPort;
pub use clipboard_change_handler::ClipboardChangeHandler;
pub use clipboard_change_origin::ClipboardChangeOriginPort;
pub use clock::ClockPort;
pub use errors::AppDirsError;
pub use history_event::HistoryEventPort;
pub use history_repository::HistoryRepositoryPort;
pub use system_clipboard::SystemClipboardPort;
pub use watcher_control::{WatcherControlError, WatcherControlPort};
