//! YAML-file-backed settings store.
//!
//! The CLI harness reads the same key space an embedding host would provide:
//! a `garminMcp` section with `email`, `password`, and `serverPath`. The file
//! is a nested YAML document flattened to dotted keys:
//!
//! ```yaml
//! garminMcp:
//!   email: user@example.com
//!   password: hunter2
//!   serverPath: garmin-mcp
//! ```

use crate::error::{BridgeError, Result};
use crate::settings::SettingsStore;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Project-local settings file name, looked up in the working directory.
pub const PROJECT_SETTINGS_FILE: &str = "garmin-mcp.yml";

/// Find the settings file to load.
///
/// Priority: explicit `--config` path, then `./garmin-mcp.yml`, then
/// `~/.config/garmin-mcp/config.yml`. Returns `None` when nothing exists,
/// which callers treat as "all defaults", not an error.
pub fn discover_settings_file(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project = cwd.join(PROJECT_SETTINGS_FILE);
    if project.is_file() {
        return Some(project);
    }

    let user = dirs::config_dir()?.join("garmin-mcp").join("config.yml");
    if user.is_file() {
        Some(user)
    } else {
        None
    }
}

/// Settings loaded from a YAML file, flattened to dotted keys.
#[derive(Debug, Default, Clone)]
pub struct FileSettings {
    values: HashMap<String, String>,
    source: Option<PathBuf>,
}

impl FileSettings {
    /// An empty store: every lookup misses and typed readers fall back to
    /// their defaults.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store backed by pre-flattened values with no source file.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values,
            source: None,
        }
    }

    /// Load and flatten a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(BridgeError::SettingsNotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = fs::read_to_string(path)?;
        let doc: serde_yaml::Value =
            serde_yaml::from_str(&raw).map_err(|e| BridgeError::SettingsParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut values = HashMap::new();
        flatten("", &doc, &mut values);

        tracing::debug!(path = %path.display(), keys = values.len(), "loaded settings file");

        Ok(Self {
            values,
            source: Some(path.to_path_buf()),
        })
    }

    /// The file these settings came from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Flatten nested mappings into dotted keys; scalars become strings.
///
/// Sequences and non-string mapping keys are skipped: the settings key space
/// is flat strings, and anything else in the file is someone else's data.
fn flatten(prefix: &str, value: &serde_yaml::Value, out: &mut HashMap<String, String>) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                let Some(name) = k.as_str() else { continue };
                let key = if prefix.is_empty() {
                    name.to_string()
                } else {
                    format!("{}.{}", prefix, name)
                };
                flatten(&key, v, out);
            }
        }
        serde_yaml::Value::String(s) => {
            if !prefix.is_empty() {
                out.insert(prefix.to_string(), s.clone());
            }
        }
        serde_yaml::Value::Number(n) => {
            if !prefix.is_empty() {
                out.insert(prefix.to_string(), n.to_string());
            }
        }
        serde_yaml::Value::Bool(b) => {
            if !prefix.is_empty() {
                out.insert(prefix.to_string(), b.to_string());
            }
        }
        serde_yaml::Value::Null | serde_yaml::Value::Sequence(_) => {}
        serde_yaml::Value::Tagged(tagged) => flatten(prefix, &tagged.value, out),
    }
}
