use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::events::{CustomerSyncEvent, HookEnvelope};

// ============================================================================
// Hook Dispatcher
// ============================================================================
//
// Forwards envelopes to whatever subscribes to a sync event. The gate only
// sees the HookDispatcher trait; HookRegistry is the production
// implementation and RecordingDispatcher captures calls in memory.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Hook '{handler}' failed on {channel}: {message}")]
    HandlerFailed {
        channel: String,
        handler: String,
        message: String,
    },
}

#[async_trait]
pub trait HookDispatcher: Send + Sync {
    async fn dispatch(&self, envelope: &HookEnvelope) -> Result<(), DispatchError>;
}

/// A subscriber registered for one or more sync events
#[async_trait]
pub trait HookHandler: Send + Sync {
    fn name(&self) -> &str;

    async fn handle(&self, envelope: &HookEnvelope) -> anyhow::Result<()>;
}

// ============================================================================
// Hook Registry
// ============================================================================

/// Handlers keyed by event kind, run in registration order
#[derive(Default)]
pub struct HookRegistry {
    handlers: HashMap<CustomerSyncEvent, Vec<Arc<dyn HookHandler>>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        event: CustomerSyncEvent,
        handler: Arc<dyn HookHandler>,
    ) -> &mut Self {
        tracing::debug!(
            channel = event.channel(),
            handler = handler.name(),
            "Registered sync hook"
        );
        self.handlers.entry(event).or_default().push(handler);
        self
    }

    pub fn has_hook(&self, event: CustomerSyncEvent) -> bool {
        self.handlers.get(&event).is_some_and(|handlers| !handlers.is_empty())
    }

    pub fn handler_count(&self, event: CustomerSyncEvent) -> usize {
        self.handlers.get(&event).map_or(0, Vec::len)
    }
}

#[async_trait]
impl HookDispatcher for HookRegistry {
    async fn dispatch(&self, envelope: &HookEnvelope) -> Result<(), DispatchError> {
        let Some(handlers) = self.handlers.get(&envelope.event) else {
            tracing::debug!(channel = envelope.channel(), "No hook registered, nothing to call");
            return Ok(());
        };

        for handler in handlers {
            handler
                .handle(envelope)
                .await
                .map_err(|e| DispatchError::HandlerFailed {
                    channel: envelope.channel().to_string(),
                    handler: handler.name().to_string(),
                    message: format!("{e:#}"),
                })?;
        }

        Ok(())
    }
}

// ============================================================================
// Recording Dispatcher
// ============================================================================

/// Keeps every envelope it receives; never fails
#[derive(Default)]
pub struct RecordingDispatcher {
    calls: Mutex<Vec<HookEnvelope>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn calls(&self) -> Vec<HookEnvelope> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl HookDispatcher for RecordingDispatcher {
    async fn dispatch(&self, envelope: &HookEnvelope) -> Result<(), DispatchError> {
        self.calls.lock().await.push(envelope.clone());
        Ok(())
    }
}
