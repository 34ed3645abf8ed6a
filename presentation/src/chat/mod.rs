//! Interactive chat module
//!
//! Provides a readline-based interactive conversation with the agent.

mod repl;

pub use repl::ChatRepl;
