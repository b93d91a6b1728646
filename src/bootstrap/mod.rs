//! Startup: config loading, tracing and dependency wiring.
//!
//! ```text
//! load_config() → wire_dependencies() → AppRuntime::usecases()
//! ```

pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use runtime::{AppRuntime, UseCases};
pub use wiring::wire_dependencies;
