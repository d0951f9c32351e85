//! Prometheus metrics for the catalog services.
//!
//! - recorder installation and the `/metrics` endpoint
//! - [`metrics_middleware`] for per-route HTTP metrics
//! - [`ProductMetrics`] for product operations
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_router, metrics_middleware};
//!
//! init_metrics()?;
//! let app = Router::new()
//!     .merge(api_routes)
//!     .layer(axum::middleware::from_fn(metrics_middleware))
//!     .merge(metrics_router());
//! ```

pub mod middleware;
pub mod products;

pub use middleware::metrics_middleware;
pub use products::ProductMetrics;

use axum::{Router, routing::get};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the global Prometheus recorder.
///
/// Idempotent: later calls return the handle from the first successful one.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;
        info!("Prometheus metrics recorder initialized");
        register_metric_descriptions();
        Ok(handle)
    })
}

pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Prometheus text exposition of all recorded metrics.
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

/// Router exposing `GET /metrics`.
pub fn metrics_router() -> Router {
    Router::new().route("/metrics", get(metrics_handler))
}

fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_histogram};

    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP request errors"
    );

    describe_counter!(
        "product_operations_total",
        "Product operations by operation and outcome"
    );
    describe_histogram!(
        "product_store_duration_seconds",
        "Time spent in the product store per operation"
    );
}
