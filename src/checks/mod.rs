//! Prerequisite checks run at activation time.
//!
//! Each check produces a [`PrerequisiteCheck`]: an immutable record the gate
//! consumes within the same activation run. A critical check that fails
//! blocks activation; a non-critical one only produces a diagnostic.

pub mod credentials;
pub mod server;

pub use credentials::check_credentials;
pub use server::{check_server_command, is_ci};

use crate::settings::GarminSettings;

/// Display name of the credentials check.
pub const CREDENTIALS_CHECK: &str = "Garmin Connect Credentials";

/// Display name of the server executable check.
pub const SERVER_CHECK: &str = "Garmin MCP Server";

/// The outcome of a single prerequisite check.
#[derive(Debug, Clone)]
pub struct PrerequisiteCheck {
    /// Identifier shown to the user.
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Human-readable outcome, actionable on failure.
    pub message: String,
    /// Whether a failure of this check blocks activation.
    pub critical: bool,
}

impl PrerequisiteCheck {
    /// A passing check.
    pub fn passed(name: &str, message: impl Into<String>, critical: bool) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: message.into(),
            critical,
        }
    }

    /// A failing check.
    pub fn failed(name: &str, message: impl Into<String>, critical: bool) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            message: message.into(),
            critical,
        }
    }
}

/// Run all prerequisite checks in order.
pub fn run_prerequisite_checks(settings: &GarminSettings) -> Vec<PrerequisiteCheck> {
    vec![check_credentials(settings), check_server_command(settings)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passed_constructor_sets_fields() {
        let check = PrerequisiteCheck::passed(CREDENTIALS_CHECK, "ok", true);
        assert_eq!(check.name, CREDENTIALS_CHECK);
        assert!(check.passed);
        assert_eq!(check.message, "ok");
        assert!(check.critical);
    }

    #[test]
    fn failed_constructor_sets_fields() {
        let check = PrerequisiteCheck::failed(SERVER_CHECK, "nope", false);
        assert_eq!(check.name, SERVER_CHECK);
        assert!(!check.passed);
        assert!(!check.critical);
    }
}
