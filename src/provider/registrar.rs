//! Provider registration.
//!
//! Callable only after the gate has allowed activation to proceed.

use crate::error::{BridgeError, Result};
use crate::host::{ExtensionContext, ProviderRegistry};
use crate::provider::{GarminDefinitionProvider, PROVIDER_ID};
use crate::settings::GarminSettings;
use std::sync::Arc;

/// Build the Garmin definition provider and register it with the host.
///
/// The registration handle is tied to the context's session: it is released
/// automatically on deactivation. A host error is wrapped with context and
/// propagated; the caller surfaces it and aborts activation.
pub fn register_mcp_server(
    ctx: &mut ExtensionContext,
    registry: &dyn ProviderRegistry,
    settings: GarminSettings,
) -> Result<()> {
    let provider = Arc::new(GarminDefinitionProvider::new(settings));

    let registration = registry
        .register_definition_provider(PROVIDER_ID, provider)
        .map_err(|e| BridgeError::RegistrationFailed {
            message: e.to_string(),
        })?;

    ctx.push(registration);
    tracing::info!("Garmin MCP server registered successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Disposable;
    use crate::provider::McpDefinitionProvider;
    use crate::settings::{MemorySettings, KEY_EMAIL, KEY_PASSWORD};
    use anyhow::anyhow;
    use std::sync::Mutex;

    /// Registry that records registrations and keeps the provider callable.
    #[derive(Default)]
    struct RecordingRegistry {
        registered: Mutex<Vec<(String, Arc<dyn McpDefinitionProvider>)>>,
    }

    impl ProviderRegistry for RecordingRegistry {
        fn register_definition_provider(
            &self,
            id: &str,
            provider: Arc<dyn McpDefinitionProvider>,
        ) -> Result<Box<dyn Disposable>> {
            self.registered
                .lock()
                .unwrap()
                .push((id.to_string(), provider));
            Ok(Box::new(NoopHandle))
        }
    }

    struct NoopHandle;

    impl Disposable for NoopHandle {
        fn dispose(&mut self) {}
    }

    /// Registry whose registration call always fails.
    struct FailingRegistry;

    impl ProviderRegistry for FailingRegistry {
        fn register_definition_provider(
            &self,
            _id: &str,
            _provider: Arc<dyn McpDefinitionProvider>,
        ) -> Result<Box<dyn Disposable>> {
            Err(BridgeError::Other(anyhow!("registry unavailable")))
        }
    }

    fn settings(store: Arc<MemorySettings>) -> GarminSettings {
        GarminSettings::new(store)
    }

    #[test]
    fn registers_under_fixed_provider_id() {
        let registry = RecordingRegistry::default();
        let mut ctx = ExtensionContext::new();

        register_mcp_server(
            &mut ctx,
            &registry,
            settings(Arc::new(MemorySettings::new())),
        )
        .unwrap();

        let registered = registry.registered.lock().unwrap();
        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].0, PROVIDER_ID);
        assert_eq!(ctx.subscription_count(), 1);
    }

    #[test]
    fn registered_provider_reads_settings_lazily() {
        let registry = RecordingRegistry::default();
        let mut ctx = ExtensionContext::new();
        let store = Arc::new(MemorySettings::new());

        register_mcp_server(&mut ctx, &registry, settings(store.clone())).unwrap();

        let registered = registry.registered.lock().unwrap();
        let provider = &registered[0].1;

        // No credentials at call time: empty, despite registration succeeding.
        assert!(provider.provide_definitions().is_empty());

        store.set(KEY_EMAIL, "a@b.com");
        store.set(KEY_PASSWORD, "p");
        assert_eq!(provider.provide_definitions().len(), 1);
    }

    #[test]
    fn host_error_is_wrapped_with_context() {
        let mut ctx = ExtensionContext::new();

        let result = register_mcp_server(
            &mut ctx,
            &FailingRegistry,
            settings(Arc::new(MemorySettings::new())),
        );

        match result {
            Err(BridgeError::RegistrationFailed { message }) => {
                assert!(message.contains("registry unavailable"));
            }
            other => panic!("expected RegistrationFailed, got {:?}", other),
        }
        assert_eq!(ctx.subscription_count(), 0);
    }
}
