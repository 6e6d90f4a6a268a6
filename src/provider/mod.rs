//! MCP server-definition provider.
//!
//! The host invokes the registered provider at a time of its choosing,
//! possibly repeatedly over the extension's lifetime. Each invocation is a
//! stateless pure function of current settings: credentials are re-read
//! fresh every time, never captured at registration. A stale snapshot would
//! launch the server with cleared or outdated credentials.

pub mod registrar;

pub use registrar::register_mcp_server;

use crate::settings::GarminSettings;
use serde::Serialize;
use std::collections::HashMap;

/// Identifier the provider is registered under.
pub const PROVIDER_ID: &str = "garmin-mcp-provider";

/// Display label for the server definition.
pub const SERVER_LABEL: &str = "Garmin MCP";

/// Environment variable carrying the account email.
pub const ENV_EMAIL: &str = "GARMIN_EMAIL";

/// Environment variable carrying the account password.
pub const ENV_PASSWORD: &str = "GARMIN_PASSWORD";

/// A launch descriptor for one MCP server.
///
/// Ownership transfers to the host, which uses it to spawn the process.
#[derive(Debug, Clone, Serialize)]
pub struct McpServerDefinition {
    /// Display name.
    pub label: String,
    /// Executable path or name.
    pub command: String,
    /// Command arguments (currently always empty).
    pub args: Vec<String>,
    /// Environment variables for the launched process.
    pub env: HashMap<String, String>,
}

/// Produces MCP server definitions on demand.
pub trait McpDefinitionProvider: Send + Sync {
    /// Produce the current list of server definitions.
    ///
    /// An empty list means "no server available right now"; it is not an
    /// error.
    fn provide_definitions(&self) -> Vec<McpServerDefinition>;
}

/// The Garmin provider: offers exactly one server when credentials are set.
pub struct GarminDefinitionProvider {
    settings: GarminSettings,
}

impl GarminDefinitionProvider {
    /// Create a provider over the given settings.
    pub fn new(settings: GarminSettings) -> Self {
        Self { settings }
    }
}

impl McpDefinitionProvider for GarminDefinitionProvider {
    fn provide_definitions(&self) -> Vec<McpServerDefinition> {
        tracing::debug!("providing MCP server definitions");

        let email = self.settings.email();
        let password = self.settings.password();

        if email.is_empty() || password.is_empty() {
            tracing::warn!("credentials not configured, server not offered");
            return Vec::new();
        }

        let mut env = HashMap::new();
        env.insert(ENV_EMAIL.to_string(), email);
        env.insert(ENV_PASSWORD.to_string(), password);

        vec![McpServerDefinition {
            label: SERVER_LABEL.to_string(),
            command: self.settings.server_path(),
            args: Vec::new(),
            env,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{
        MemorySettings, KEY_EMAIL, KEY_PASSWORD, KEY_SERVER_PATH,
    };
    use std::sync::Arc;

    fn provider_with(store: Arc<MemorySettings>) -> GarminDefinitionProvider {
        GarminDefinitionProvider::new(GarminSettings::new(store))
    }

    #[test]
    fn unconfigured_credentials_yield_no_definitions() {
        let provider = provider_with(Arc::new(MemorySettings::new()));
        assert!(provider.provide_definitions().is_empty());
    }

    #[test]
    fn missing_password_yields_no_definitions() {
        let store = Arc::new(MemorySettings::new());
        store.set(KEY_EMAIL, "a@b.com");
        let provider = provider_with(store);
        assert!(provider.provide_definitions().is_empty());
    }

    #[test]
    fn configured_credentials_yield_one_definition() {
        let store = Arc::new(MemorySettings::new());
        store.set(KEY_EMAIL, "a@b.com");
        store.set(KEY_PASSWORD, "p");
        store.set(KEY_SERVER_PATH, "garmin-mcp");
        let provider = provider_with(store);

        let defs = provider.provide_definitions();
        assert_eq!(defs.len(), 1);

        let def = &defs[0];
        assert_eq!(def.label, SERVER_LABEL);
        assert_eq!(def.command, "garmin-mcp");
        assert!(def.args.is_empty());
        assert_eq!(def.env.get(ENV_EMAIL), Some(&"a@b.com".to_string()));
        assert_eq!(def.env.get(ENV_PASSWORD), Some(&"p".to_string()));
        assert_eq!(def.env.len(), 2);
    }

    #[test]
    fn definitions_reread_settings_on_every_call() {
        let store = Arc::new(MemorySettings::new());
        store.set(KEY_EMAIL, "a@b.com");
        store.set(KEY_PASSWORD, "p");
        let provider = provider_with(store.clone());

        assert_eq!(provider.provide_definitions().len(), 1);

        // Clearing credentials after construction must be visible.
        store.clear(KEY_PASSWORD);
        assert!(provider.provide_definitions().is_empty());

        store.set(KEY_PASSWORD, "new");
        let defs = provider.provide_definitions();
        assert_eq!(defs[0].env.get(ENV_PASSWORD), Some(&"new".to_string()));
    }

    #[test]
    fn definition_serializes_to_expected_shape() {
        let store = Arc::new(MemorySettings::new());
        store.set(KEY_EMAIL, "a@b.com");
        store.set(KEY_PASSWORD, "p");
        let provider = provider_with(store);

        let json = serde_json::to_value(provider.provide_definitions()).unwrap();
        assert_eq!(json[0]["label"], "Garmin MCP");
        assert_eq!(json[0]["command"], "garmin-mcp");
        assert_eq!(json[0]["args"].as_array().unwrap().len(), 0);
        assert_eq!(json[0]["env"]["GARMIN_EMAIL"], "a@b.com");
    }
}
