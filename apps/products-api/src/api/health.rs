//! Readiness check with a real database round trip

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health;

use crate::state::AppState;

/// `GET /ready`: pings PostgreSQL when one is configured.
///
/// The in-memory store has nothing to check, so it is always ready.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();

    if let Some(db) = &state.db {
        checks.push((
            "database",
            Box::pin(async move { check_health(db).await.map_err(|e| e.to_string()) }),
        ));
    }

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};
    use std::collections::BTreeMap;
    use tower::ServiceExt;

    fn state(db: Option<sea_orm::DatabaseConnection>) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: None,
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            db,
        }
    }

    async fn ready(state: AppState) -> (StatusCode, serde_json::Value) {
        let app = Router::new()
            .route("/ready", get(ready_handler))
            .with_state(state);
        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_ready_without_database() {
        let (status, body) = ready(state(None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"status": "ready"}));
    }

    #[tokio::test]
    async fn test_ready_with_healthy_database() {
        let row = BTreeMap::from([("?column?", Value::Int(Some(1)))]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let (status, body) = ready(state(Some(db))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_not_ready_when_database_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())])
            .into_connection();

        let (status, body) = ready(state(Some(db))).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["database"], "disconnected");
        assert_eq!(body["status"], "not ready");
    }
}
