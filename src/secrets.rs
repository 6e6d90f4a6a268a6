//! Output masking for secret values.
//!
//! Anything that prints resolved settings routes the text through an
//! [`OutputMasker`] so the configured password never reaches a terminal or a
//! log line.

use std::collections::HashMap;

/// Masks secret values in output strings.
///
/// # Example
///
/// ```
/// use garmin_mcp_bridge::secrets::OutputMasker;
///
/// let mut masker = OutputMasker::new();
/// masker.add_secret("hunter2");
///
/// let output = masker.mask("password: hunter2");
/// assert_eq!(output, "password: [REDACTED]");
/// ```
pub struct OutputMasker {
    /// Map of secret values to their masked representation.
    secrets: HashMap<String, String>,
    /// The mask string to use.
    mask: String,
}

impl OutputMasker {
    /// Create a new masker with the default mask string.
    pub fn new() -> Self {
        Self {
            secrets: HashMap::new(),
            mask: "[REDACTED]".to_string(),
        }
    }

    /// Register a secret value to be masked.
    ///
    /// Empty strings are ignored.
    pub fn add_secret(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.secrets.insert(value, self.mask.clone());
        }
    }

    /// Mask any secret values in the given string.
    pub fn mask(&self, input: &str) -> String {
        let mut result = input.to_string();
        for (secret, mask) in &self.secrets {
            result = result.replace(secret, mask);
        }
        result
    }

    /// Get the number of registered secrets.
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }
}

impl Default for OutputMasker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_registered_secret() {
        let mut masker = OutputMasker::new();
        masker.add_secret("s3cret");

        let output = masker.mask("the value is s3cret here");
        assert_eq!(output, "the value is [REDACTED] here");
    }

    #[test]
    fn masks_repeated_occurrences() {
        let mut masker = OutputMasker::new();
        masker.add_secret("abc");

        assert_eq!(masker.mask("abc abc abc"), "[REDACTED] [REDACTED] [REDACTED]");
    }

    #[test]
    fn empty_secret_is_ignored() {
        let mut masker = OutputMasker::new();
        masker.add_secret("");
        assert_eq!(masker.secret_count(), 0);
        assert_eq!(masker.mask("unchanged"), "unchanged");
    }

    #[test]
    fn unregistered_text_passes_through() {
        let masker = OutputMasker::new();
        assert_eq!(masker.mask("nothing to hide"), "nothing to hide");
    }
}
