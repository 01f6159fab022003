//! Prometheus metrics for line-item-editor.

use once_cell::sync::Lazy;
use prometheus::{register_counter_vec, CounterVec, TextEncoder};

/// Editor sessions by direction and outcome.
pub static EDITOR_SESSIONS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "line_item_editor_sessions_total",
        "Total number of editor sessions by outcome",
        &["direction", "outcome"] // saved, cancelled
    )
    .expect("Failed to register sessions_total")
});

/// Discount edits that recomputed a unit price.
pub static DISCOUNTS_APPLIED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "line_item_editor_discounts_applied_total",
        "Total number of discount edits that recomputed a unit price",
        &["direction"]
    )
    .expect("Failed to register discounts_applied_total")
});

/// Manual unit price entries.
pub static PRICE_OVERRIDES_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "line_item_editor_price_overrides_total",
        "Total number of manual unit price entries",
        &["direction"]
    )
    .expect("Failed to register price_overrides_total")
});

/// Save attempts refused because the draft was incomplete.
pub static REJECTED_SAVES_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "line_item_editor_rejected_saves_total",
        "Total number of save attempts on incomplete drafts",
        &["direction"]
    )
    .expect("Failed to register rejected_saves_total")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&EDITOR_SESSIONS_TOTAL);
    Lazy::force(&DISCOUNTS_APPLIED_TOTAL);
    Lazy::force(&PRICE_OVERRIDES_TOTAL);
    Lazy::force(&REJECTED_SAVES_TOTAL);
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_default()
}
