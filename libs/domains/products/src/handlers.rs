//! HTTP handlers for the Products API
//!
//! Each mutating route declares its validation rules next to the handler
//! and enforces them through a middleware layer, so a handler only runs
//! for requests whose parameters and body already passed every check.

use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{Next, from_fn},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{RuleSet, body, param};
use serde_json::Value;
use std::sync::{Arc, LazyLock};
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreateProduct, DataResponse, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API for Products",
        description = "API for Products",
        version = "1.0.0"
    ),
    paths(
        list_products,
        create_product,
        get_product_by_id,
        update_product,
        update_availability,
        delete_product,
    ),
    components(schemas(Product, CreateProduct, UpdateProduct)),
    tags(
        (name = "Products", description = "Operations about products")
    )
)]
pub struct ApiDoc;

fn price_greater_than_zero(value: &Value) -> bool {
    value.as_f64().map(|price| price > 0.0).unwrap_or(false)
}

static ID_RULES: LazyLock<RuleSet> =
    LazyLock::new(|| RuleSet::new().rule(param("id").int("ID not valid")));

static CREATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .rule(body("name").non_empty_string("Product name not empty"))
        .rule(
            body("price")
                .numeric("the value must be a number")
                .not_empty("Price name not empty")
                .custom(price_greater_than_zero, "Price not valid"),
        )
});

static UPDATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .rule(param("id").int("ID not valid"))
        .rule(body("name").non_empty_string("Product name not empty"))
        .rule(
            body("price")
                .numeric("the value must be a number")
                .not_empty("Price name not empty")
                .custom(price_greater_than_zero, "Price not valid"),
        )
        .rule(body("availability").boolean("Valor para disponibilidad no valido"))
});

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    use axum::handler::Handler;

    let shared_service = Arc::new(service);

    let check_id = |req: Request, next: Next| ID_RULES.enforce(req, next);
    let check_create = |req: Request, next: Next| CREATE_RULES.enforce(req, next);
    let check_update = |req: Request, next: Next| UPDATE_RULES.enforce(req, next);

    Router::new()
        .route(
            "/",
            get(list_products::<R>).post(create_product::<R>.layer(from_fn(check_create))),
        )
        .route(
            "/{id}",
            get(get_product_by_id::<R>.layer(from_fn(check_id)))
                .put(update_product::<R>.layer(from_fn(check_update)))
                .patch(update_availability::<R>.layer(from_fn(check_id)))
                .delete(delete_product::<R>.layer(from_fn(check_id))),
        )
        .with_state(shared_service)
}

/// Get a list of products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "Successful response", body = [Product])
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<DataResponse<Vec<Product>>>> {
    let products = service.list_products().await?;
    Ok(Json(DataResponse { data: products }))
}

/// Creates a new Product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Bad Request - Invalid input data")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Json(input): Json<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "The ID of the product to retrieve")
    ),
    responses(
        (status = 200, description = "Successful response", body = Product),
        (status = 400, description = "Bad Request - Invalid ID"),
        (status = 404, description = "Product Not Found")
    )
)]
async fn get_product_by_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<Json<DataResponse<Product>>> {
    let product = service.get_product(id).await?;
    Ok(Json(DataResponse { data: product }))
}

/// Updates a product with user input
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "The ID of the product to update")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Successful response", body = Product),
        (status = 400, description = "Bad Request - Invalid ID or input data"),
        (status = 404, description = "Product Not Found")
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateProduct>,
) -> ProductResult<Json<DataResponse<Product>>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(DataResponse { data: product }))
}

/// Update Product availability
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "The ID of the product to update")
    ),
    responses(
        (status = 200, description = "Successful response", body = Product),
        (status = 400, description = "Bad Request - Invalid ID"),
        (status = 404, description = "Product Not Found")
    )
)]
async fn update_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<Json<DataResponse<Product>>> {
    let product = service.toggle_availability(id).await?;
    Ok(Json(DataResponse { data: product }))
}

/// Deletes a product by a given ID
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "The ID of the product to delete")
    ),
    responses(
        (status = 200, description = "Successful response", body = String),
        (status = 400, description = "Bad Request - Invalid ID"),
        (status = 404, description = "Product Not Found")
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<Json<DataResponse<String>>> {
    service.delete_product(id).await?;
    Ok(Json(DataResponse {
        data: "Eliminate Product".to_string(),
    }))
}
