//! Prometheus Metrics Module
//!
//! Counts the envelopes handed back to callers, labelled by result code, so
//! the share of "99" responses can be alerted on.

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::shared::error::ResponseCode;

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Envelopes sent, by result code
pub static RESPONSES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("responses_total", "Total number of response envelopes by code")
            .namespace("studybuddy"),
        &["code"],
    )
    .expect("Failed to create RESPONSES_TOTAL metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(RESPONSES_TOTAL.clone()))
        .expect("Failed to register RESPONSES_TOTAL");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::warn!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Count one envelope with the given code
pub fn record_envelope(code: ResponseCode) {
    Lazy::force(&REGISTRY);
    RESPONSES_TOTAL.with_label_values(&[code.as_str()]).inc();
}
