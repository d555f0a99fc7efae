//! String Toggle - split and merge string literals
//!
//! This crate provides the core types and logic for toggling a string
//! literal between a single line and one word per line, implementing the
//! Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod strings;
pub mod syntax;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ToggleConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::Runtime;
