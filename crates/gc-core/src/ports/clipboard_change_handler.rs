//! Clipboard change handler port
//!
//! The platform layer calls this when clipboard text changes; the app layer
//! implements it.

use anyhow::Result;

#[async_trait::async_trait]
pub trait ClipboardChangeHandler: Send + Sync {
    /// Called once per observed clipboard change, with the text already read.
    async fn on_clipboard_changed(&self, text: String) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopHandler;

    #[async_trait::async_trait]
    impl ClipboardChangeHandler for NoopHandler {
        async fn on_clipboard_changed(&self, _text: String) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn handler_is_object_safe() {
        let handler: Box<dyn ClipboardChangeHandler> = Box::new(NoopHandler);
        handler.on_clipboard_changed("x".into()).await.unwrap();
    }
}
