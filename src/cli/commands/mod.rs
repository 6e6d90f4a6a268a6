//! CLI command implementations.

pub mod check;
pub mod completions;
pub mod config;
pub mod definitions;
pub mod dispatcher;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
