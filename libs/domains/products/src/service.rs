//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, NewProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer applies defaults and business rules, and
/// orchestrates repository operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product. Availability defaults to `true` when the
    /// client leaves it out.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let record = NewProduct {
            name: input.name,
            price: input.price,
            availability: input.availability.unwrap_or(true),
        };

        self.repository.create(record).await
    }

    /// List all products, ordered by ID
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Replace every mutable field of an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;

        product.name = input.name;
        product.price = input.price;
        product.availability = input.availability;

        self.repository.save(product).await
    }

    /// Flip the availability flag of an existing product
    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;
        product.availability = !product.availability;

        self.repository.save(product).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let product = self.get_product(id).await?;
        self.repository.delete(product).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;

    fn product(id: i32, availability: bool) -> Product {
        Product {
            id,
            name: "Monitor".to_string(),
            price: 300.0,
            availability,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_availability_to_true() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .withf(|input| input.availability)
            .returning(|input| {
                Ok(Product {
                    id: 1,
                    name: input.name,
                    price: input.price,
                    availability: input.availability,
                })
            });

        let service = ProductService::new(repo);
        let created = service
            .create_product(CreateProduct {
                name: "Monitor".to_string(),
                price: 300.0,
                availability: None,
            })
            .await
            .unwrap();

        assert!(created.availability);
    }

    #[tokio::test]
    async fn test_create_keeps_explicit_availability() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .withf(|input| !input.availability)
            .returning(|input| {
                Ok(Product {
                    id: 1,
                    name: input.name,
                    price: input.price,
                    availability: input.availability,
                })
            });

        let service = ProductService::new(repo);
        let created = service
            .create_product(CreateProduct {
                name: "Monitor".to_string(),
                price: 300.0,
                availability: Some(false),
            })
            .await
            .unwrap();

        assert!(!created.availability);
    }

    #[tokio::test]
    async fn test_get_product_maps_missing_record_to_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let result = service.get_product(150).await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn test_toggle_availability_flips_flag() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Some(product(id, true))));
        repo.expect_save()
            .withf(|saved| !saved.availability)
            .returning(Ok);

        let service = ProductService::new(repo);
        let updated = service.toggle_availability(1).await.unwrap();

        assert!(!updated.availability);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Some(product(id, true))));
        repo.expect_save().returning(Ok);

        let service = ProductService::new(repo);
        let updated = service
            .update_product(
                1,
                UpdateProduct {
                    name: "Monitor Curvo".to_string(),
                    price: 10.0,
                    availability: false,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Monitor Curvo");
        assert_eq!(updated.price, 10.0);
        assert!(!updated.availability);
    }

    #[tokio::test]
    async fn test_store_errors_propagate_unchanged() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .returning(|| Err(ProductError::Database("connection reset".to_string())));

        let service = ProductService::new(repo);
        let result = service.list_products().await;

        assert!(matches!(result, Err(ProductError::Database(msg)) if msg == "connection reset"));
    }

    #[tokio::test]
    async fn test_delete_requires_existing_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_delete().never();

        let service = ProductService::new(repo);
        let result = service.delete_product(150).await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}
