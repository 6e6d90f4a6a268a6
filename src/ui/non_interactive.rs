//! Non-interactive UI for CI and headless environments.

use crate::error::Result;

use super::{ErrorAction, OutputMode, UserInterface};

/// UI implementation that never prompts.
///
/// Blocking notifications are printed and auto-dismissed; nothing waits for
/// input, so a gated activation in CI fails fast with the message on stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn error_with_actions(&mut self, msg: &str, _actions: &[ErrorAction]) -> Result<ErrorAction> {
        self.error(msg);
        Ok(ErrorAction::Dismiss)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
