//! Command-line interface.
//!
//! The CLI is the bundled host harness: it runs the same activation
//! pipeline an embedding host would, against file-backed settings.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{Command, CommandDispatcher, CommandResult};
