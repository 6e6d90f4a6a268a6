//! Credential presence and shape validation.

use crate::checks::{PrerequisiteCheck, CREDENTIALS_CHECK};
use crate::settings::GarminSettings;

/// Check that Garmin Connect credentials are configured.
///
/// Both values are read trimmed. Missing values and an email without an `@`
/// both fail critically; this is the check that blocks activation until the
/// user fixes their settings. No side effects beyond settings reads.
pub fn check_credentials(settings: &GarminSettings) -> PrerequisiteCheck {
    let email = settings.email();
    let password = settings.password();

    if email.is_empty() || password.is_empty() {
        return PrerequisiteCheck::failed(
            CREDENTIALS_CHECK,
            "Email or password not configured. Please set garminMcp.email and garminMcp.password in settings.",
            true,
        );
    }

    if !email.contains('@') {
        return PrerequisiteCheck::failed(
            CREDENTIALS_CHECK,
            "Email appears invalid. Please check your configuration.",
            true,
        );
    }

    PrerequisiteCheck::passed(CREDENTIALS_CHECK, "Credentials configured", true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{GarminSettings, MemorySettings, KEY_EMAIL, KEY_PASSWORD};
    use std::sync::Arc;

    fn settings(email: &str, password: &str) -> GarminSettings {
        let store = MemorySettings::new();
        store.set(KEY_EMAIL, email);
        store.set(KEY_PASSWORD, password);
        GarminSettings::new(Arc::new(store))
    }

    #[test]
    fn empty_email_fails_critically() {
        let check = check_credentials(&settings("", "hunter2"));
        assert!(!check.passed);
        assert!(check.critical);
        assert!(check.message.contains("garminMcp.email"));
    }

    #[test]
    fn empty_password_fails_critically() {
        let check = check_credentials(&settings("user@example.com", ""));
        assert!(!check.passed);
        assert!(check.critical);
    }

    #[test]
    fn both_empty_fails_critically() {
        let check = check_credentials(&GarminSettings::new(Arc::new(MemorySettings::new())));
        assert!(!check.passed);
        assert!(check.critical);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let check = check_credentials(&settings("   ", "  "));
        assert!(!check.passed);
    }

    #[test]
    fn email_without_at_fails_critically() {
        let check = check_credentials(&settings("not-an-email", "hunter2"));
        assert!(!check.passed);
        assert!(check.critical);
        assert!(check.message.contains("invalid"));
    }

    #[test]
    fn valid_credentials_pass() {
        let check = check_credentials(&settings("user@example.com", "x"));
        assert!(check.passed);
        assert!(check.critical);
        assert_eq!(check.message, "Credentials configured");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_before_validation() {
        let check = check_credentials(&settings(" user@example.com ", " x "));
        assert!(check.passed);
    }
}
