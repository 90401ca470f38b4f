use async_trait::async_trait;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

/// In-memory product repository.
///
/// Backs the API in tests and local development where no PostgreSQL
/// instance is available. IDs are assigned sequentially starting at 1,
/// matching the auto-increment behavior of the real table.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
    next_id: AtomicI32,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(0),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let product = Product {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: input.name,
            price: input.price,
            availability: input.availability,
        };

        self.products.write().await.push(product.clone());
        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let mut products = self.products.read().await.clone();
        products.sort_by_key(|product| product.id);
        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|product| product.id == id).cloned())
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let slot = products
            .iter_mut()
            .find(|existing| existing.id == product.id)
            .ok_or(ProductError::NotFound)?;

        *slot = product.clone();
        tracing::info!(product_id = product.id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, product: Product) -> ProductResult<()> {
        self.products
            .write()
            .await
            .retain(|existing| existing.id != product.id);

        tracing::info!(product_id = product.id, "Deleted product");
        Ok(())
    }
}
