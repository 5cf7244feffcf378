//! HTTP API serving the dashboard metrics tiles.
//!
//! Exposes `GET /api/metrics` behind a permissive CORS policy, plus a
//! health check and the process' own Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all routes and layers.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let prometheus_router = Router::new()
        .route("/metrics", get(routes::prometheus::get))
        .with_state(metrics_handle);

    let api_router = Router::new().route("/metrics", get(routes::dashboard::list));

    Router::new()
        .route("/health", get(routes::health::check))
        .nest("/api", api_router)
        .merge(prometheus_router)
        .fallback(routes::not_found)
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Global cross-origin policy: any origin, method and header, with credentials.
///
/// `*` cannot be combined with credentials, so origin, methods and headers are
/// mirrored from the request. Requests without an `Origin` fall through to the
/// `*` set by [`create_app`].
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
