// ============================================================================
// customer_sync - storefront customer sync hooks
// ============================================================================
//
// Forwards "customer created/updated" events from the storefront API to the
// registered sync hooks, gated by a site preference and the customer's
// authentication state.
//
// ============================================================================

pub mod config;
pub mod domain;
pub mod hooks;
pub mod metrics;
