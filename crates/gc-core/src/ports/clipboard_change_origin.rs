use crate::ClipboardChangeOrigin;
use async_trait::async_trait;
use std::time::Duration;

/// Tags an upcoming clipboard change with its origin.
///
/// Before gclip writes to the system clipboard it records the hash of the
/// text it is about to write. When the watcher later reports a change with
/// that hash, the capture path consumes the marker and sees `LocalRestore`
/// instead of recording the text a second time.
#[async_trait]
pub trait ClipboardChangeOriginPort: Send + Sync {
    async fn set_next_origin(
        &self,
        content_hash: String,
        origin: ClipboardChangeOrigin,
        ttl: Duration,
    );

    /// Take the marker for `content_hash` if one is pending and unexpired.
    async fn consume_origin_or_default(
        &self,
        content_hash: &str,
        default_origin: ClipboardChangeOrigin,
    ) -> ClipboardChangeOrigin;
}
