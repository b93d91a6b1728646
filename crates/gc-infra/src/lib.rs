//! # gc-infra
//!
//! Infrastructure adapters for gclip: the SQLite-backed history repository
//! and clipboard change origin store, and the system clock.

pub mod db;
pub mod time;

pub use time::SystemClock;
