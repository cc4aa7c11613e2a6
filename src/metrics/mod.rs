use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

// ============================================================================
// Metrics Module - Prometheus counters for the sync gate
// ============================================================================
//
// - customer_sync_dispatched_total{channel}
// - customer_sync_skipped_total{channel, reason}
//
// ============================================================================

pub const REASON_SYNC_DISABLED: &str = "sync_disabled";
pub const REASON_NOT_AUTHENTICATED: &str = "not_authenticated";

pub struct SyncMetrics {
    registry: Registry,
    pub dispatched: IntCounterVec,
    pub skipped: IntCounterVec,
}

impl SyncMetrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let dispatched = IntCounterVec::new(
            Opts::new("customer_sync_dispatched_total", "Customer sync events forwarded to hooks"),
            &["channel"],
        )?;
        registry.register(Box::new(dispatched.clone()))?;

        let skipped = IntCounterVec::new(
            Opts::new("customer_sync_skipped_total", "Customer sync events held back by the gate"),
            &["channel", "reason"],
        )?;
        registry.register(Box::new(skipped.clone()))?;

        Ok(Self {
            registry,
            dispatched,
            skipped,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_dispatched(&self, channel: &str) {
        self.dispatched.with_label_values(&[channel]).inc();
    }

    pub fn record_skipped(&self, channel: &str, reason: &str) {
        self.skipped.with_label_values(&[channel, reason]).inc();
    }

    /// Text exposition format, as served on a /metrics endpoint
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
