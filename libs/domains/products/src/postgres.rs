use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::ProductResult,
    models::{NewProduct, Product},
    repository::ProductRepository,
};

/// PostgreSQL-backed product repository (SeaORM)
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = product.into();
        let model = active_model.update(&self.db).await?;

        tracing::info!(product_id = model.id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, product: Product) -> ProductResult<()> {
        entity::Entity::delete_by_id(product.id)
            .exec(&self.db)
            .await?;

        tracing::info!(product_id = product.id, "Deleted product");
        Ok(())
    }
}
