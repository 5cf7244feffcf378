//! Dashboard metric tiles.

use axum::Json;
use common::MetricRecord;

/// Builds the dashboard tiles, in display order.
pub fn dashboard_metrics() -> Vec<MetricRecord> {
    vec![
        MetricRecord::new("Website Visitors", "5.2K"),
        MetricRecord::new("Conversions", "320"),
        MetricRecord::new("Ad Spend", "$1.4K"),
        MetricRecord::new("CTR", "2.4%"),
        MetricRecord::new("Leads", "97"),
    ]
}

/// GET /api/metrics — returns the dashboard tiles as a JSON array.
#[tracing::instrument]
pub async fn list() -> Json<Vec<MetricRecord>> {
    metrics::counter!("dashboard_metrics_requests_total").increment(1);
    Json(dashboard_metrics())
}
