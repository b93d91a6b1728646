use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use gc_core::ports::SystemClipboardPort;
use std::sync::Mutex;

/// [`SystemClipboardPort`] backed by `clipboard-rs`.
///
/// The platform clipboard context is opened on first use, so commands that
/// never touch the clipboard also run without a display server.
pub struct ClipboardRsAdapter {
    inner: Mutex<Option<ClipboardContext>>,
}

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

impl ClipboardRsAdapter {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    fn with_context<T>(&self, f: impl FnOnce(&ClipboardContext) -> Result<T>) -> Result<T> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))?;

        if guard.is_none() {
            *guard = Some(map_clipboard_err(ClipboardContext::new())?);
        }
        match guard.as_ref() {
            Some(ctx) => f(ctx),
            None => Err(anyhow!("clipboard context unavailable")),
        }
    }
}

impl Default for ClipboardRsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboardPort for ClipboardRsAdapter {
    fn read_text(&self) -> Result<Option<String>> {
        self.with_context(|ctx| {
            if !ctx.has(ContentFormat::Text) {
                return Ok(None);
            }
            map_clipboard_err(ctx.get_text()).map(Some)
        })
    }

    fn write_text(&self, text: &str) -> Result<()> {
        self.with_context(|ctx| map_clipboard_err(ctx.set_text(text.to_string())))
    }
}
