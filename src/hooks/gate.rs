use std::sync::Arc;

use crate::config::SitePreferences;
use crate::domain::customer::CustomerProvider;
use crate::metrics::{SyncMetrics, REASON_NOT_AUTHENTICATED, REASON_SYNC_DISABLED};

use super::dispatcher::{DispatchError, HookDispatcher};
use super::events::{CustomerSyncEvent, HookEnvelope};

// ============================================================================
// Customer Sync Gate
// ============================================================================
//
// Called by the storefront API after a customer create (POST) or update
// (PATCH) succeeds. Forwards the customer's profile to the sync hooks when
// the site preference is on and the customer is authenticated.
//
// Checks run in order and short-circuit:
//   1. site preference off      -> SkippedSyncDisabled
//   2. customer not logged in   -> SkippedNotAuthenticated
//   3. otherwise                -> one dispatch, Dispatched
//
// Dispatcher errors are returned as-is. Nothing is cached between calls.
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Dispatched,
    SkippedSyncDisabled,
    SkippedNotAuthenticated,
}

impl SyncOutcome {
    pub fn was_dispatched(&self) -> bool {
        matches!(self, SyncOutcome::Dispatched)
    }
}

pub struct CustomerSyncGate<P: ?Sized, D: ?Sized> {
    preferences: Arc<P>,
    dispatcher: Arc<D>,
    site_id: Option<String>,
    metrics: Option<Arc<SyncMetrics>>,
}

impl<P, D> CustomerSyncGate<P, D>
where
    P: SitePreferences + ?Sized,
    D: HookDispatcher + ?Sized,
{
    pub fn new(preferences: Arc<P>, dispatcher: Arc<D>) -> Self {
        Self {
            preferences,
            dispatcher,
            site_id: None,
            metrics: None,
        }
    }

    pub fn with_site(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<SyncMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// After a customer was created through the storefront API
    pub async fn on_created<C>(&self, customer: &C) -> Result<SyncOutcome, DispatchError>
    where
        C: CustomerProvider + ?Sized,
    {
        self.forward(CustomerSyncEvent::Created, customer).await
    }

    /// After a customer was updated through the storefront API
    pub async fn on_updated<C>(&self, customer: &C) -> Result<SyncOutcome, DispatchError>
    where
        C: CustomerProvider + ?Sized,
    {
        self.forward(CustomerSyncEvent::Updated, customer).await
    }

    async fn forward<C>(
        &self,
        event: CustomerSyncEvent,
        customer: &C,
    ) -> Result<SyncOutcome, DispatchError>
    where
        C: CustomerProvider + ?Sized,
    {
        if !self.preferences.sync_customers_enabled() {
            tracing::debug!(channel = event.channel(), "Customer sync disabled for site, skipping");
            self.record_skip(event, REASON_SYNC_DISABLED);
            return Ok(SyncOutcome::SkippedSyncDisabled);
        }

        if !customer.is_authenticated() {
            tracing::debug!(channel = event.channel(), "Customer not authenticated, skipping");
            self.record_skip(event, REASON_NOT_AUTHENTICATED);
            return Ok(SyncOutcome::SkippedNotAuthenticated);
        }

        let profile = customer.profile();
        let mut envelope = HookEnvelope::new(event, profile.clone());
        if let Some(site_id) = &self.site_id {
            envelope = envelope.with_site(site_id.clone());
        }

        tracing::info!(
            channel = event.channel(),
            action = event.action(),
            customer_no = %profile.customer_no,
            event_id = %envelope.event_id,
            "Forwarding customer sync event"
        );

        self.dispatcher.dispatch(&envelope).await?;

        if let Some(metrics) = &self.metrics {
            metrics.record_dispatched(event.channel());
        }
        Ok(SyncOutcome::Dispatched)
    }

    fn record_skip(&self, event: CustomerSyncEvent, reason: &str) {
        if let Some(metrics) = &self.metrics {
            metrics.record_skipped(event.channel(), reason);
        }
    }
}
