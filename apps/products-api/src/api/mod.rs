//! API routes module

pub mod health;
pub mod products;

use axum::{Router, middleware, routing::get};

use crate::state::AppState;

/// Create all API routes, with per-route HTTP metrics
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest(domain_products::entity::Model::URL, products::router(state))
        .layer(middleware::from_fn(observability::metrics_middleware))
}

/// Router with the `/ready` endpoint, merged next to the stateless app router
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
