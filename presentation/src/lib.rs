//! Presentation layer for medchat
//!
//! This crate contains CLI definitions, the terminal conversation view,
//! output formatters (including the sanitized HTML renderer), and the
//! interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod view;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use view::TerminalView;
