//! Products API routes

use axum::Router;
use domain_products::{InMemoryProductRepository, PgProductRepository, handlers};

use crate::state::AppState;

/// Create products router backed by PostgreSQL, or by memory when no database is configured
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => handlers::router(PgProductRepository::new(db.clone())),
        None => handlers::router(InMemoryProductRepository::new()),
    }
}
