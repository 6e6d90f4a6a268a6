//! The `config` command: show resolved settings.

use std::sync::Arc;

use serde::Serialize;

use crate::cli::args::ConfigArgs;
use crate::cli::commands::{Command, CommandResult};
use crate::error::Result;
use crate::secrets::OutputMasker;
use crate::settings::{FileSettings, GarminSettings};
use crate::ui::UserInterface;

/// Shows where settings were loaded from and what each key resolved to.
/// The password is masked unless `--show-secrets` is given.
pub struct ConfigCommand {
    settings: FileSettings,
    args: ConfigArgs,
}

#[derive(Serialize)]
struct ResolvedConfig {
    source: String,
    email: String,
    password: String,
    #[serde(rename = "serverPath")]
    server_path: String,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(settings: FileSettings, args: ConfigArgs) -> Self {
        Self { settings, args }
    }

    fn resolve(&self) -> ResolvedConfig {
        let source = self
            .settings
            .source()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string());

        let garmin = GarminSettings::new(Arc::new(self.settings.clone()));
        let password = garmin.password();

        let password = if self.args.show_secrets || password.is_empty() {
            password
        } else {
            let mut masker = OutputMasker::new();
            masker.add_secret(&password);
            masker.mask(&password)
        };

        ResolvedConfig {
            source,
            email: garmin.email(),
            password,
            server_path: garmin.server_path(),
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = self.resolve();

        if self.args.json {
            let rendered =
                serde_json::to_string_pretty(&resolved).map_err(anyhow::Error::from)?;
            ui.message(&rendered);
            return Ok(CommandResult::success());
        }

        ui.show_header("Resolved settings");
        ui.message(&format!("source: {}", resolved.source));
        ui.message(&format!("garminMcp.email: {}", resolved.email));
        ui.message(&format!("garminMcp.password: {}", resolved.password));
        ui.message(&format!("garminMcp.serverPath: {}", resolved.server_path));

        Ok(CommandResult::success())
    }
}
