//! Products API - REST server for the product catalog

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use migration::Migrator;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = match config.database.clone() {
        Some(database) => {
            info!("Connecting to PostgreSQL");
            let db = database::postgres::connect_from_config_with_retry(database, None)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

            database::postgres::run_migrations::<Migrator>(&db, config.app.name)
                .await
                .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;

            Some(db)
        }
        None => {
            warn!("DATABASE_URL not set, products are kept in memory and lost on restart");
            None
        }
    };

    observability::init_metrics()?;

    let state = AppState { config, db };

    let api_routes = api::routes(&state);
    let router =
        axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &state.config.server).await?;

    // /health: liveness, /ready: database ping, /metrics: Prometheus
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()))
        .merge(observability::metrics_router());

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    let server = state.config.server.clone();
    let db = state.db;

    create_production_app(app, &server, Duration::from_secs(30), async move {
        if let Some(db) = db {
            info!("Shutting down: closing PostgreSQL connections");
            match db.close().await {
                Ok(()) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
