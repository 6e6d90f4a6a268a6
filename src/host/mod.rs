//! Host capability boundary.
//!
//! The embedding host owns the extension registry, the settings surface, and
//! the lifetime of everything registered. This module models that boundary
//! as three narrow traits plus [`ExtensionContext`], which ties registration
//! handles to the active session: handles pushed onto the context are
//! disposed automatically on deactivation.
//!
//! [`LoggingRegistry`] and [`LoggingPanel`] are the CLI harness's stand-ins
//! for a real host.

use crate::error::Result;
use crate::provider::McpDefinitionProvider;
use std::sync::Arc;

/// A registration handle that can be released.
pub trait Disposable: Send {
    /// Release the underlying registration.
    fn dispose(&mut self);
}

/// The host's extension registry.
pub trait ProviderRegistry {
    /// Register a definition provider under a stable identifier.
    ///
    /// The returned handle unregisters the provider when disposed. Errors
    /// come from the host and are wrapped by the caller.
    fn register_definition_provider(
        &self,
        id: &str,
        provider: Arc<dyn McpDefinitionProvider>,
    ) -> Result<Box<dyn Disposable>>;
}

/// The host's settings surface.
pub trait SettingsPanel {
    /// Open the settings UI at the given section.
    fn open(&self, section: &str);
}

/// Per-session extension state.
///
/// Holds the subscriptions whose lifetime is tied to the active session.
/// Dropping the context (deactivation) disposes everything that is left.
#[derive(Default)]
pub struct ExtensionContext {
    subscriptions: Vec<Box<dyn Disposable>>,
}

impl ExtensionContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tie a registration handle to this session.
    pub fn push(&mut self, subscription: Box<dyn Disposable>) {
        self.subscriptions.push(subscription);
    }

    /// Number of live subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Dispose all subscriptions now, in registration order.
    pub fn dispose_all(&mut self) {
        for sub in &mut self.subscriptions {
            sub.dispose();
        }
        self.subscriptions.clear();
    }
}

impl Drop for ExtensionContext {
    fn drop(&mut self) {
        self.dispose_all();
    }
}

/// Registry stand-in for the CLI harness: accepts every registration and
/// logs it.
pub struct LoggingRegistry;

impl ProviderRegistry for LoggingRegistry {
    fn register_definition_provider(
        &self,
        id: &str,
        _provider: Arc<dyn McpDefinitionProvider>,
    ) -> Result<Box<dyn Disposable>> {
        tracing::info!(provider = id, "registered MCP server definition provider");
        Ok(Box::new(LoggedRegistration {
            id: id.to_string(),
        }))
    }
}

struct LoggedRegistration {
    id: String,
}

impl Disposable for LoggedRegistration {
    fn dispose(&mut self) {
        tracing::debug!(provider = %self.id, "unregistered MCP server definition provider");
    }
}

/// Settings-surface stand-in for the CLI harness: there is no settings UI to
/// open, so it logs where to edit instead.
pub struct LoggingPanel {
    hint: String,
}

impl LoggingPanel {
    /// Create a panel that points users at the given location.
    pub fn new(hint: impl Into<String>) -> Self {
        Self { hint: hint.into() }
    }
}

impl SettingsPanel for LoggingPanel {
    fn open(&self, section: &str) {
        tracing::info!(section, "settings requested; edit {}", self.hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingDisposable(Arc<AtomicUsize>);

    impl Disposable for CountingDisposable {
        fn dispose(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn context_disposes_subscriptions_on_drop() {
        let count = Arc::new(AtomicUsize::new(0));
        {
            let mut ctx = ExtensionContext::new();
            ctx.push(Box::new(CountingDisposable(count.clone())));
            ctx.push(Box::new(CountingDisposable(count.clone())));
            assert_eq!(ctx.subscription_count(), 2);
        }
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dispose_all_is_idempotent() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut ctx = ExtensionContext::new();
        ctx.push(Box::new(CountingDisposable(count.clone())));

        ctx.dispose_all();
        ctx.dispose_all();
        drop(ctx);

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn logging_registry_accepts_registrations() {
        use crate::provider::{GarminDefinitionProvider, PROVIDER_ID};
        use crate::settings::{GarminSettings, MemorySettings};

        let provider = GarminDefinitionProvider::new(GarminSettings::new(Arc::new(
            MemorySettings::new(),
        )));
        let handle =
            LoggingRegistry.register_definition_provider(PROVIDER_ID, Arc::new(provider));
        assert!(handle.is_ok());
    }
}
