mod copied_content;
mod event;
mod hash;
mod item;
mod origin;

pub use copied_content::{CopiedContent, NormalizeError, RawPayload};
pub use event::HistoryEvent;
pub use hash::content_hash;
pub use item::{ClipKey, ClipboardItem};
pub use origin::ClipboardChangeOrigin;
