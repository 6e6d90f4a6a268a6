//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::settings::{discover_settings_file, FileSettings};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command against the given UI, returning an exit status.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_path: Option<PathBuf>,
    cwd: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(config_path: Option<PathBuf>, cwd: PathBuf) -> Self {
        Self { config_path, cwd }
    }

    /// Load the settings store every command runs against.
    ///
    /// No file anywhere means defaults, not an error; the credentials check
    /// is what turns missing settings into an actionable message.
    pub fn load_settings(&self) -> Result<FileSettings> {
        match discover_settings_file(self.config_path.as_deref(), &self.cwd) {
            Some(path) => FileSettings::load(&path),
            None => Ok(FileSettings::empty()),
        }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            // `check` consumes no arguments here; its --non-interactive flag
            // only influences which UI the caller constructs.
            Some(Commands::Check(_)) | None => {
                let cmd = super::check::CheckCommand::new(self.load_settings()?);
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd = super::config::ConfigCommand::new(self.load_settings()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Definitions(args)) => {
                let cmd = super::definitions::DefinitionsCommand::new(
                    self.load_settings()?,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_loads_defaults_when_no_file_exists() {
        let temp = tempfile::TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(None, temp.path().to_path_buf());
        // The user-global file may exist on a developer machine; only assert
        // that a missing project file does not error.
        assert!(dispatcher.load_settings().is_ok());
    }

    #[test]
    fn dispatcher_reports_missing_explicit_config() {
        let dispatcher = CommandDispatcher::new(
            Some(PathBuf::from("/nonexistent/settings.yml")),
            PathBuf::from("."),
        );
        assert!(dispatcher.load_settings().is_err());
    }
}
