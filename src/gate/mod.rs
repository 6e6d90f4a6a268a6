//! Prerequisite gate.
//!
//! Aggregates check results and decides whether activation may proceed.
//! Failed critical checks block: their messages are concatenated into one
//! blocking notification offering "Open Settings" / "Dismiss". The chosen
//! action only opens the settings surface or closes the notification; it
//! never re-runs checks, and the gate returns "blocked" either way. Failed
//! advisory checks are logged and activation proceeds.
//!
//! Evaluation is deterministic: the same check list always yields the same
//! decision, with no retry.

use crate::checks::PrerequisiteCheck;
use crate::error::Result;
use crate::host::SettingsPanel;
use crate::settings::SETTINGS_SECTION;
use crate::ui::{ErrorAction, UserInterface};

/// The gate's verdict for one activation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateDecision {
    /// Whether activation may proceed to registration.
    pub can_proceed: bool,
}

/// Split checks into failed-critical and failed-advisory.
///
/// Passing checks fall out of both lists; the gate has no further use for
/// them.
pub fn partition_failures(
    checks: &[PrerequisiteCheck],
) -> (Vec<&PrerequisiteCheck>, Vec<&PrerequisiteCheck>) {
    let failed: Vec<_> = checks.iter().filter(|c| !c.passed).collect();
    let (critical, advisory) = failed.into_iter().partition(|c| c.critical);
    (critical, advisory)
}

/// Present check results and decide whether activation can proceed.
pub fn evaluate(
    checks: &[PrerequisiteCheck],
    ui: &mut dyn UserInterface,
    panel: &dyn SettingsPanel,
) -> Result<GateDecision> {
    let (critical, advisory) = partition_failures(checks);

    if !critical.is_empty() {
        let messages = critical
            .iter()
            .map(|c| format!("{}: {}", c.name, c.message))
            .collect::<Vec<_>>()
            .join("\n");

        let action = ui.error_with_actions(
            &format!("Critical prerequisites not met:\n{}", messages),
            &[ErrorAction::OpenSettings, ErrorAction::Dismiss],
        )?;

        if action == ErrorAction::OpenSettings {
            panel.open(SETTINGS_SECTION);
        }

        return Ok(GateDecision { can_proceed: false });
    }

    for check in &advisory {
        tracing::warn!(check = %check.name, "{}", check.message);
        ui.warning(&format!("{}: {}", check.name, check.message));
    }

    Ok(GateDecision { can_proceed: true })
}
