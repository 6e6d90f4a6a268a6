//! The `check` command: run the activation pipeline.

use std::sync::Arc;

use crate::activation::{activate, deactivate, ActivationOutcome};
use crate::cli::commands::{Command, CommandResult};
use crate::error::Result;
use crate::host::{ExtensionContext, LoggingPanel, LoggingRegistry};
use crate::settings::{FileSettings, GarminSettings, PROJECT_SETTINGS_FILE};
use crate::ui::UserInterface;

/// Runs prerequisite checks and, on success, registers the provider with the
/// harness's logging registry. The exit code reflects the gate: 0 when
/// activation completed, 1 when it was blocked or failed.
pub struct CheckCommand {
    settings: FileSettings,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(settings: FileSettings) -> Self {
        Self { settings }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings_hint = self
            .settings
            .source()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| PROJECT_SETTINGS_FILE.to_string());

        let garmin = GarminSettings::new(Arc::new(self.settings.clone()));

        ui.show_header("Garmin MCP Bridge");
        if ui.output_mode().shows_diagnostics() {
            ui.message(&format!("settings: {}", settings_hint));
        }

        let mut ctx = ExtensionContext::new();
        let panel = LoggingPanel::new(settings_hint);
        let outcome = activate(&mut ctx, garmin, ui, &LoggingRegistry, &panel);

        match outcome {
            ActivationOutcome::Activated => {
                ui.success("Prerequisites met, Garmin MCP server registered");
                deactivate(ctx);
                Ok(CommandResult::success())
            }
            ActivationOutcome::PrerequisitesNotMet | ActivationOutcome::Failed => {
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::collections::HashMap;

    #[test]
    fn empty_settings_fail_with_exit_code_one() {
        let cmd = CheckCommand::new(FileSettings::empty());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.errors().iter().any(|e| e.contains("not configured")));
    }

    #[test]
    fn configured_settings_succeed() {
        let mut values = HashMap::new();
        values.insert("garminMcp.email".to_string(), "user@example.com".to_string());
        values.insert("garminMcp.password".to_string(), "hunter2".to_string());
        values.insert("garminMcp.serverPath".to_string(), "echo".to_string());
        let cmd = CheckCommand::new(FileSettings::with_values(values));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }
}
