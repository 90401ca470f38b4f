//! Database connection cleanup utilities.
//!
//! Helpers for properly closing database connections during graceful
//! shutdown.

use tracing::{error, info};

/// Cleanup handler for PostgreSQL connections (SeaORM).
///
/// SeaORM's `DatabaseConnection` closes automatically on drop, but
/// we can explicitly close it to ensure proper cleanup logging.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::close_postgres;
/// use database::postgres::DatabaseConnection;
///
/// close_postgres(db, "main").await;
/// ```
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
