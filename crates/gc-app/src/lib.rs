//! gclip application layer
//!
//! Use cases over the gc-core ports, the in-process history event bus and
//! the dependency grouping handed in by the binary's bootstrap.

pub mod app_paths;
pub mod deps;
pub mod event_bus;
pub mod usecases;

pub use app_paths::AppPaths;
pub use deps::AppDeps;
pub use event_bus::BroadcastHistoryEvents;
