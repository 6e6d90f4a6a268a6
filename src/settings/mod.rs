//! Settings access.
//!
//! The host owns settings storage; this crate only ever reads it. The
//! [`SettingsStore`] trait models that boundary as an injected read-only
//! key-value service, keyed by dotted names under the `garminMcp` section.
//! [`GarminSettings`] is the typed reader the rest of the crate uses, and
//! [`MemorySettings`] backs tests (its interior mutability lets a test change
//! values between provider registration and invocation).
//!
//! Settings may change between activation and a later provider call, so
//! callers must hold a store and re-read at use time, never a snapshot.

pub mod file;

pub use file::{discover_settings_file, FileSettings, PROJECT_SETTINGS_FILE};

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Settings section all keys live under.
pub const SETTINGS_SECTION: &str = "garminMcp";

/// Garmin Connect account email.
pub const KEY_EMAIL: &str = "garminMcp.email";

/// Garmin Connect account password.
pub const KEY_PASSWORD: &str = "garminMcp.password";

/// Path or name of the garmin-mcp executable.
pub const KEY_SERVER_PATH: &str = "garminMcp.serverPath";

/// Default server command when `serverPath` is unset.
pub const DEFAULT_SERVER_PATH: &str = "garmin-mcp";

/// Read-only key-value settings service, owned by the host.
pub trait SettingsStore: Send + Sync {
    /// Look up a raw value by dotted key. `None` means "not configured".
    fn get(&self, key: &str) -> Option<String>;
}

/// Typed, trimming reader over a [`SettingsStore`].
///
/// Cheap to clone; every accessor reads the store fresh.
#[derive(Clone)]
pub struct GarminSettings {
    store: Arc<dyn SettingsStore>,
}

impl GarminSettings {
    /// Wrap a settings store.
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Configured email, trimmed. Empty string when unset.
    pub fn email(&self) -> String {
        self.get_trimmed(KEY_EMAIL)
    }

    /// Configured password, trimmed. Empty string when unset.
    pub fn password(&self) -> String {
        self.get_trimmed(KEY_PASSWORD)
    }

    /// Configured server command, falling back to [`DEFAULT_SERVER_PATH`]
    /// when unset or blank.
    pub fn server_path(&self) -> String {
        let value = self.get_trimmed(KEY_SERVER_PATH);
        if value.is_empty() {
            DEFAULT_SERVER_PATH.to_string()
        } else {
            value
        }
    }

    fn get_trimmed(&self, key: &str) -> String {
        self.store
            .get(key)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }
}

/// In-memory settings store.
///
/// Values can be changed through a shared reference, which is exactly what
/// provider-laziness tests need.
#[derive(Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettings {
    /// Create an empty store (all lookups miss).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous one.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .write()
            .expect("settings lock poisoned")
            .insert(key.into(), value.into());
    }

    /// Remove a value so subsequent lookups miss.
    pub fn clear(&self, key: &str) {
        self.values
            .write()
            .expect("settings lock poisoned")
            .remove(key);
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .expect("settings lock poisoned")
            .get(key)
            .cloned()
    }
}
