use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub availability: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            availability: model.availability,
        }
    }
}

// Insert payload: the ID stays unset so the database assigns it
impl From<crate::models::NewProduct> for ActiveModel {
    fn from(input: crate::models::NewProduct) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            price: Set(input.price),
            availability: Set(input.availability),
        }
    }
}

impl From<crate::models::Product> for ActiveModel {
    fn from(product: crate::models::Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            name: Set(product.name),
            price: Set(product.price),
            availability: Set(product.availability),
        }
    }
}
