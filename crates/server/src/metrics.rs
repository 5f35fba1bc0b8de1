use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static CAFES_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "cafe_catalog_cafes_created_total",
        "Total cafes created through the add form"
    )
    .expect("register cafes_created_total")
});

pub static CAFES_DELETED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "cafe_catalog_cafes_deleted_total",
        "Total cafes removed through the delete route"
    )
    .expect("register cafes_deleted_total")
});

pub static SUBMISSIONS_REJECTED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "cafe_catalog_submissions_rejected_total",
        "Add-form submissions rejected, by reason",
        &["reason"]
    )
    .expect("register submissions_rejected_total")
});

/// Registers every counter so `/metrics` lists them before the first event.
pub fn init() {
    Lazy::force(&CAFES_CREATED_TOTAL);
    Lazy::force(&CAFES_DELETED_TOTAL);
    Lazy::force(&SUBMISSIONS_REJECTED_TOTAL);
}

pub fn record_rejection(reason: &str) {
    SUBMISSIONS_REJECTED_TOTAL.with_label_values(&[reason]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
