//! Products API routes

use axum::Router;
use domain_products::{InMemoryProductRepository, PgProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Create the products router over whichever repository the
/// configuration selected.
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => {
            let repository = PgProductRepository::new(db.clone());
            handlers::router(ProductService::new(repository))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, products are stored in memory");
            handlers::router(ProductService::new(InMemoryProductRepository::new()))
        }
    }
}
