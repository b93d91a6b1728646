//! # gc-core
//!
//! Core domain models and ports for gclip.
//!
//! This crate contains pure domain logic without any infrastructure dependencies:
//! the [`CopiedContent`] record and its normalizer, the clipboard history model,
//! configuration, and the ports implemented by `gc-infra` and `gc-platform`.

pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{
    content_hash, ClipKey, ClipboardChangeOrigin, ClipboardItem, CopiedContent, HistoryEvent,
    NormalizeError, RawPayload,
};
pub use config::AppConfig;
