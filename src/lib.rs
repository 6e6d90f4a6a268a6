//! Garmin MCP Bridge - prerequisite-checked MCP server registration.
//!
//! This crate wires a `garmin-mcp` executable into an MCP-capable host. On
//! activation it validates Garmin Connect credentials and probes the server
//! executable, then registers a lazy definition provider that hands the host
//! a launch descriptor whenever the host asks. The bundled CLI runs the same
//! pipeline against a file-backed settings store.
//!
//! # Modules
//!
//! - [`activation`] - Activation pipeline orchestration
//! - [`checks`] - Prerequisite checks (credentials, server probe)
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`gate`] - Blocking gate over failed prerequisite checks
//! - [`host`] - Host capability traits and the extension context
//! - [`provider`] - MCP server definition provider
//! - [`secrets`] - Output masking for credential values
//! - [`settings`] - Settings stores and the typed settings reader
//! - [`ui`] - User-facing notifications and prompts
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use garmin_mcp_bridge::provider::{GarminDefinitionProvider, McpDefinitionProvider};
//! use garmin_mcp_bridge::settings::{GarminSettings, MemorySettings, KEY_EMAIL, KEY_PASSWORD};
//!
//! let store = Arc::new(MemorySettings::new());
//! store.set(KEY_EMAIL, "user@example.com");
//! store.set(KEY_PASSWORD, "secret");
//!
//! let provider = GarminDefinitionProvider::new(GarminSettings::new(store));
//! let definitions = provider.provide_definitions();
//! assert_eq!(definitions.len(), 1);
//! assert_eq!(definitions[0].label, "Garmin MCP");
//! ```

pub mod activation;
pub mod checks;
pub mod cli;
pub mod error;
pub mod gate;
pub mod host;
pub mod provider;
pub mod secrets;
pub mod settings;
pub mod ui;

pub use error::{BridgeError, Result};
