//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! The gate presents its blocking error notification through this trait, so
//! embedding hosts and tests can supply their own affordance.

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::{MockCall, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, BridgeTheme};

use crate::error::Result;

/// An action offered alongside a blocking error notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
    /// Open the settings surface at the garminMcp section.
    OpenSettings,
    /// Close the notification without acting.
    Dismiss,
}

impl ErrorAction {
    /// Label shown for this action.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenSettings => "Open Settings",
            Self::Dismiss => "Dismiss",
        }
    }
}

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a blocking error notification offering the given actions,
    /// returning the one the user chose.
    fn error_with_actions(&mut self, msg: &str, actions: &[ErrorAction]) -> Result<ErrorAction>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_labels() {
        assert_eq!(ErrorAction::OpenSettings.label(), "Open Settings");
        assert_eq!(ErrorAction::Dismiss.label(), "Dismiss");
    }
}
