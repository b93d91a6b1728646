//! Business logic use cases
//!
//! ```text
//! ClipboardWatcher
//!        ↓
//! CaptureClipboardChange ──► RecordCopiedContent ──► HistoryEventPort
//!
//! ListHistory / GetCurrentContent          → read side
//! RestoreHistoryEntry / DeleteHistoryEntry → write side, one item
//! ClearHistory                             → write side, everything
//! ```

pub mod capture_clipboard_change;
pub mod clear_history;
pub mod delete_history_entry;
pub mod get_current_content;
pub mod list_history;
pub mod record_copied_content;
pub mod restore_history_entry;
pub mod start_clipboard_watcher;
pub mod stop_clipboard_watcher;

#[cfg(test)]
pub(crate) mod testing;

pub use capture_clipboard_change::CaptureClipboardChange;
pub use clear_history::ClearHistory;
pub use delete_history_entry::DeleteHistoryEntry;
pub use get_current_content::GetCurrentContent;
pub use list_history::ListHistory;
pub use record_copied_content::RecordCopiedContent;
pub use restore_history_entry::{RestoreError, RestoreHistoryEntry};
pub use start_clipboard_watcher::{StartClipboardWatcher, StartClipboardWatcherError};
pub use stop_clipboard_watcher::StopClipboardWatcher;
