use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product as stored and returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// The Product ID
    #[schema(example = 1)]
    pub id: i32,
    /// The Product Name
    #[schema(example = "Monitor Led 42\"")]
    pub name: String,
    /// The Product Price
    #[schema(example = 300.0)]
    pub price: f64,
    /// The Product Availability
    #[schema(example = true)]
    pub availability: bool,
}

/// Request body for creating a product.
///
/// `availability` may be omitted; new products default to available.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Monitor Led 50 Pulgadas 4k")]
    pub name: String,
    #[schema(example = 399.0)]
    pub price: f64,
    #[serde(default)]
    pub availability: Option<bool>,
}

/// Insert payload handed to repositories, with defaults already resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

/// Request body for a full product update. Every field is required.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct UpdateProduct {
    #[schema(example = "Monitor Curvo")]
    pub name: String,
    #[schema(example = 399.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

/// Successful responses wrap their payload under a `data` key.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}
