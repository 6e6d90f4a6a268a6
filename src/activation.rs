//! Activation lifecycle.
//!
//! [`activate`] is the error boundary for the whole pipeline: prerequisite
//! checks, the gate, and provider registration all run inside it, and every
//! failure is caught here. The host process is never destabilized; a failed
//! activation leaves the extension inert and returns an outcome instead of
//! an error. There is no automatic retry: the user fixes their settings and
//! reactivates.

use crate::checks::run_prerequisite_checks;
use crate::error::Result;
use crate::gate;
use crate::host::{ExtensionContext, ProviderRegistry, SettingsPanel};
use crate::provider::register_mcp_server;
use crate::settings::GarminSettings;
use crate::ui::UserInterface;

/// How an activation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// Prerequisites passed and the provider is registered.
    Activated,
    /// A critical prerequisite failed; nothing was registered.
    PrerequisitesNotMet,
    /// Activation errored (registration failure or UI error); nothing was
    /// registered and the error was surfaced as a notification.
    Failed,
}

/// Activate the extension.
///
/// Returns normally in every case.
pub fn activate(
    ctx: &mut ExtensionContext,
    settings: GarminSettings,
    ui: &mut dyn UserInterface,
    registry: &dyn ProviderRegistry,
    panel: &dyn SettingsPanel,
) -> ActivationOutcome {
    tracing::info!("Garmin MCP bridge is activating");

    match try_activate(ctx, settings, ui, registry, panel) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "activation failed");
            ui.error(&format!("Garmin MCP bridge failed to activate: {}", e));
            ActivationOutcome::Failed
        }
    }
}

fn try_activate(
    ctx: &mut ExtensionContext,
    settings: GarminSettings,
    ui: &mut dyn UserInterface,
    registry: &dyn ProviderRegistry,
    panel: &dyn SettingsPanel,
) -> Result<ActivationOutcome> {
    let checks = run_prerequisite_checks(&settings);
    for check in &checks {
        tracing::debug!(check = %check.name, passed = check.passed, "{}", check.message);
        // The server probe reports failure as a passed check carrying a
        // warning message; it must still reach the user.
        if check.passed {
            if check.message.starts_with("Warning") {
                tracing::warn!(check = %check.name, "{}", check.message);
                ui.warning(&check.message);
            } else {
                ui.success(&check.message);
            }
        }
    }

    let decision = gate::evaluate(&checks, ui, panel)?;
    if !decision.can_proceed {
        tracing::info!("prerequisites not met, activation paused");
        return Ok(ActivationOutcome::PrerequisitesNotMet);
    }

    register_mcp_server(ctx, registry, settings)?;

    tracing::info!("Garmin MCP bridge activated successfully");
    Ok(ActivationOutcome::Activated)
}

/// Deactivate the extension.
///
/// Consuming the context disposes every registration it holds; no other
/// cleanup is required.
pub fn deactivate(ctx: ExtensionContext) {
    tracing::info!("Garmin MCP bridge is deactivating");
    drop(ctx);
}
