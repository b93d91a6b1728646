//! gclip binary support: command-line surface, bootstrap and command
//! handlers. The domain lives in the `gc-*` workspace crates.

pub mod bootstrap;
pub mod cli;
pub mod commands;
