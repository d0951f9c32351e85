//! Axum middleware for per-route HTTP metrics.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{Request, Response},
    middleware::Next,
};
use metrics::{counter, histogram};
use std::time::Instant;

/// Records, per method and matched route:
/// - `http_requests_total` with `status` and `status_class`
/// - `http_request_duration_seconds`
/// - `http_requests_errors_total` for 4xx and 5xx
///
/// Unmatched requests are labelled with the `<unmatched>` path so arbitrary
/// URLs cannot blow up label cardinality.
pub async fn metrics_middleware(
    matched_path: Option<MatchedPath>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = matched_path
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "<unmatched>".to_string());

    let response = next.run(request).await;

    let status = response.status();
    let status_class = match status.as_u16() {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    };

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.as_u16().to_string(),
        "status_class" => status_class
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method.clone(),
        "path" => path.clone()
    )
    .record(start.elapsed().as_secs_f64());

    if status.is_client_error() || status.is_server_error() {
        counter!(
            "http_requests_errors_total",
            "method" => method,
            "path" => path,
            "status" => status.as_u16().to_string()
        )
        .increment(1);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::get};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/products/{id}", get(|| async { StatusCode::NOT_FOUND }))
            .layer(axum::middleware::from_fn(metrics_middleware))
    }

    #[test]
    fn test_metrics_use_matched_route() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async {
                let request = Request::builder()
                    .uri("/products/42")
                    .body(Body::empty())
                    .unwrap();
                let response = app().oneshot(request).await.unwrap();
                assert_eq!(response.status(), StatusCode::NOT_FOUND);
            });
        });

        let rendered = handle.render();
        assert!(rendered.contains(r#"path="/products/{id}""#));
        assert!(rendered.contains("http_requests_errors_total"));
        assert!(!rendered.contains("/products/42"));
    }
}
