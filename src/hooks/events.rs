use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::customer::Profile;

// ============================================================================
// Customer Sync Events
// ============================================================================

/// The lifecycle events forwarded to downstream sync hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerSyncEvent {
    Created,
    Updated,
}

impl CustomerSyncEvent {
    /// Hook channel name downstream subscribers register under
    pub fn channel(&self) -> &'static str {
        match self {
            CustomerSyncEvent::Created => "app.customer.created",
            CustomerSyncEvent::Updated => "app.customer.updated",
        }
    }

    /// Action name passed alongside the payload
    pub fn action(&self) -> &'static str {
        match self {
            CustomerSyncEvent::Created => "created",
            CustomerSyncEvent::Updated => "updated",
        }
    }
}

impl std::fmt::Display for CustomerSyncEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.channel())
    }
}

// ============================================================================
// Hook Envelope
// ============================================================================

/// One (channel, action, payload) dispatch, with tracing metadata.
/// Channel and action always follow `event`; they are only stored so the
/// serialized form carries them.
#[derive(Debug, Clone, Serialize)]
pub struct HookEnvelope {
    pub event_id: Uuid,
    pub event: CustomerSyncEvent,
    channel: &'static str,
    action: &'static str,
    pub payload: Profile,
    pub site_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl HookEnvelope {
    pub fn new(event: CustomerSyncEvent, payload: Profile) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event,
            channel: event.channel(),
            action: event.action(),
            payload,
            site_id: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_site(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    pub fn channel(&self) -> &'static str {
        self.channel
    }

    pub fn action(&self) -> &'static str {
        self.action
    }

    /// The (channel, action, payload) triple as handed to subscribers
    pub fn triple(&self) -> (&str, &str, &Profile) {
        (self.channel, self.action, &self.payload)
    }
}
