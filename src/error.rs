//! Error types for the bridge.
//!
//! This module defines [`BridgeError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `BridgeError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `BridgeError::Other`) for unexpected errors
//! - Nothing below the activation boundary is allowed to panic; all errors
//!   carry actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bridge operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Explicitly requested settings file does not exist.
    #[error("Settings file not found: {}", path.display())]
    SettingsNotFound { path: PathBuf },

    /// Settings file exists but could not be read or parsed.
    #[error("Failed to parse settings at {}: {message}", path.display())]
    SettingsParseError { path: PathBuf, message: String },

    /// The host registry rejected the provider registration.
    #[error("Failed to register Garmin MCP server: {message}")]
    RegistrationFailed { message: String },

    /// The probed server command could not be spawned.
    #[error("Command could not be started: {command}")]
    SpawnFailed { command: String },

    /// The probed server command exceeded its deadline.
    #[error("Command timed out after {timeout_ms} ms: {command}")]
    CommandTimeout { command: String, timeout_ms: u64 },

    /// The probed server command exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
