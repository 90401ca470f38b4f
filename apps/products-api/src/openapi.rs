//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API for Products",
        version = "1.0.0",
        description = "API for Products"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Operations about products")
    )
)]
pub struct ApiDoc;
