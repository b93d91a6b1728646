//! # gc-platform
//!
//! Platform-specific implementations for gclip.
//!
//! This crate contains the adapters that talk to the operating system: the
//! system clipboard, the polling clipboard watcher and the per-user
//! application directories.

pub mod app_dirs;
pub mod clipboard;
pub mod ipc;
pub mod runtime;
