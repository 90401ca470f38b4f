use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends (PostgreSQL,
/// in-memory, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and return it with its assigned ID
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// List all products ordered by ID, ascending
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Persist changes to an already-fetched product
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Delete an already-fetched product
    async fn delete(&self, product: Product) -> ProductResult<()>;
}
