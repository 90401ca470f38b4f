use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::ErrorMessage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            ProductError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorMessage::new("Product not found")),
            )
                .into_response(),
            ProductError::Database(message) => {
                tracing::error!(error = %message, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorMessage::new(message)),
                )
                    .into_response()
            }
        }
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}
