use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use customer_sync::config::SiteConfig;
use customer_sync::domain::customer::{Customer, CustomerNo, Email, PhoneNumber, Profile};
use customer_sync::hooks::{CustomerSyncEvent, CustomerSyncGate, HookRegistry, JsonLogHandler};
use customer_sync::metrics::SyncMetrics;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO, overridable with RUST_LOG
    // Example: RUST_LOG=debug B2CCRM_SYNC_CUSTOMERS_VIA_OCAPI=true cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,customer_sync=debug"))
        )
        .init();

    // === 1. Site configuration ===
    let config = Arc::new(SiteConfig::load()?);
    tracing::info!(
        site_id = %config.site_id,
        sync_enabled = config.preferences.sync_customers_via_ocapi,
        "Site configuration loaded"
    );

    // === 2. Hook registry ===
    let mut registry = HookRegistry::new();
    let log_handler = Arc::new(JsonLogHandler::new("json-log"));
    registry
        .register(CustomerSyncEvent::Created, log_handler.clone())
        .register(CustomerSyncEvent::Updated, log_handler);
    for event in [CustomerSyncEvent::Created, CustomerSyncEvent::Updated] {
        tracing::debug!(
            channel = event.channel(),
            handlers = registry.handler_count(event),
            has_hook = registry.has_hook(event),
            "Hook registration"
        );
    }

    // === 3. Gate ===
    let metrics = Arc::new(SyncMetrics::new()?);
    let gate = CustomerSyncGate::new(config.clone(), Arc::new(registry))
        .with_site(config.site_id.clone())
        .with_metrics(metrics.clone());

    // === 4. Simulated storefront API traffic ===
    let registered = Customer::registered(
        Profile::new(
            CustomerNo::new("00000001")?,
            Email::new("jane.doe@example.com")?,
            "Jane",
            "Doe",
        )
        .with_phone(PhoneNumber::new("+1 555 0100")),
    );
    let guest = Customer::guest(Profile::new(
        CustomerNo::new("00000002")?,
        Email::new("guest@example.com")?,
        "Guest",
        "Shopper",
    ));

    let outcome = gate.on_created(&registered).await?;
    tracing::info!(?outcome, dispatched = outcome.was_dispatched(), "POST /customers (registered)");

    let outcome = gate.on_created(&guest).await?;
    tracing::info!(?outcome, dispatched = outcome.was_dispatched(), "POST /customers (guest)");

    let outcome = gate.on_updated(&registered).await?;
    tracing::info!(?outcome, dispatched = outcome.was_dispatched(), "PATCH /customers/00000001");

    tracing::debug!(metrics = %metrics.render()?, "Sync metrics");

    Ok(())
}
