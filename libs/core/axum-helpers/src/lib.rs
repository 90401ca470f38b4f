//! # Axum Helpers
//!
//! A collection of utilities and middleware for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`validation`]**: Declarative per-route validation rules with an
//!   error-aggregating middleware layer
//! - **[`server`]**: Server setup, health checks, graceful shutdown
//! - **[`errors`]**: String-message error bodies and fallback handlers
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes).await?;
//!
//!     let config = ServerConfig::default();
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod server;
pub mod validation;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, close_postgres,
    create_production_app, create_router, health_router, run_health_checks,
};

// Re-export error types
pub use errors::ErrorMessage;

// Re-export validation types
pub use validation::{
    ErrorAccumulator, FieldError, Location, RequestInput, Rule, RuleSet, body, param,
};
