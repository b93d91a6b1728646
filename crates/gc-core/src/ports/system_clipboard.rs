//! System clipboard port
//!
//! Abstracts text access to the operating system clipboard so use cases and
//! the watcher can run against a fake in tests.

use anyhow::Result;

pub trait SystemClipboardPort: Send + Sync {
    /// Read the current clipboard text.
    ///
    /// Returns `Ok(None)` when the clipboard holds no text (empty, image, files).
    fn read_text(&self) -> Result<Option<String>>;

    /// Replace the clipboard content with `text`.
    fn write_text(&self, text: &str) -> Result<()>;
}
