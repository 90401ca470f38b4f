//! Products API - REST server

use axum_helpers::server::{close_postgres, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

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

    // Connect to PostgreSQL when configured; otherwise the repository
    // lives in memory and no connection is needed.
    let db = match config.postgres.clone() {
        Some(postgres) => {
            let db = database::postgres::connect_from_config_with_retry(postgres, None).await?;
            info!("Successfully connected to PostgreSQL");
            Some(db)
        }
        None => None,
    };

    let state = AppState {
        config: config.clone(),
        db,
    };

    // Build REST router
    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(config.app))
        .merge(api::health::router(state.clone()));

    info!("Starting Products API on port {}", config.server.port);

    // Run server with graceful shutdown
    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        if let Some(db) = state.db {
            close_postgres(db, "main").await;
        }
    })
    .await?;

    info!("Products API shutdown complete");
    Ok(())
}
