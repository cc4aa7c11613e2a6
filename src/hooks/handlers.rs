use async_trait::async_trait;

use super::dispatcher::HookHandler;
use super::events::HookEnvelope;

/// Writes each envelope as one JSON line to the log, for sites with no CRM
/// connector registered
pub struct JsonLogHandler {
    name: String,
}

impl JsonLogHandler {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn render(envelope: &HookEnvelope) -> anyhow::Result<String> {
        Ok(serde_json::to_string(envelope)?)
    }
}

#[async_trait]
impl HookHandler for JsonLogHandler {
    fn name(&self) -> &str {
        &self.name
    }

    async fn handle(&self, envelope: &HookEnvelope) -> anyhow::Result<()> {
        let line = Self::render(envelope)?;
        tracing::info!(
            handler = %self.name,
            channel = envelope.channel(),
            payload = %line,
            "Customer sync event"
        );
        Ok(())
    }
}
