//! Comet - a terminal text editor
//!
//! This crate provides the core types and logic for a minimal kilo-style
//! terminal editor implementing the Elm Architecture pattern: state in
//! [`model`], transitions in [`update`], rendering in [`view`], and a
//! [`runtime`] loop that owns the terminal.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod input;
pub mod logging;
pub mod messages;
pub mod model;
pub mod prompt;
pub mod runtime;
pub mod search;
pub mod terminal;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::App;
