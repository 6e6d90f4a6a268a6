//! The `definitions` command: print what the provider would hand the host.

use std::sync::Arc;

use crate::cli::args::DefinitionsArgs;
use crate::cli::commands::{Command, CommandResult};
use crate::error::Result;
use crate::provider::{GarminDefinitionProvider, McpDefinitionProvider};
use crate::settings::{FileSettings, GarminSettings};
use crate::ui::UserInterface;

/// Invokes the definition provider once against the resolved settings and
/// prints the result as JSON. Unconfigured credentials produce `[]`, the
/// same empty answer an embedding host would receive.
pub struct DefinitionsCommand {
    settings: FileSettings,
    args: DefinitionsArgs,
}

impl DefinitionsCommand {
    /// Create a new definitions command.
    pub fn new(settings: FileSettings, args: DefinitionsArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for DefinitionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let garmin = GarminSettings::new(Arc::new(self.settings.clone()));
        let provider = GarminDefinitionProvider::new(garmin);
        let definitions = provider.provide_definitions();

        let rendered = if self.args.compact {
            serde_json::to_string(&definitions)
        } else {
            serde_json::to_string_pretty(&definitions)
        }
        .map_err(anyhow::Error::from)?;

        ui.message(&rendered);
        Ok(CommandResult::success())
    }
}
