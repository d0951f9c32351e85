//! Application state management

use sea_orm::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Open pool when PostgreSQL is configured
    pub db: Option<DatabaseConnection>,
}
