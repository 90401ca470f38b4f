//! Products Domain
//!
//! This module provides a complete domain implementation for managing products.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints + validation rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, defaults
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + PostgreSQL / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use domain_products::{handlers, postgres::PgProductRepository, service::ProductService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = database::postgres::connect("postgres://localhost/products").await?;
//!
//! let repository = PgProductRepository::new(db);
//! let service = ProductService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{CreateProduct, DataResponse, NewProduct, Product, UpdateProduct};
pub use postgres::PgProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
