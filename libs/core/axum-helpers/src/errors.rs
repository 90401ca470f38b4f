//! String-message error bodies.
//!
//! Responses with a singular failure reason carry `{"error": "<message>"}`.
//! Validation failures use a different shape (an array of field errors,
//! see [`crate::validation`]); the two must not be mixed.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// JSON body of the form `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub error: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorMessage::new("Route not found")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_serializes_as_plain_string() {
        let body = serde_json::to_value(ErrorMessage::new("Product not found")).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Product not found"}));
    }
}
