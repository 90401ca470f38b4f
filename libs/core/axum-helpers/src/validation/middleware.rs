use axum::{
    Json, RequestPartsExt,
    body::{Body, to_bytes},
    extract::{RawPathParams, Request},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::collections::HashMap;

use super::rules::{ErrorAccumulator, RequestInput, RuleSet};
use crate::errors::ErrorMessage;

/// Bodies above this size are rejected before validation runs.
const BODY_LIMIT: usize = 1024 * 1024;

impl RuleSet {
    /// Validate the request against this rule set before the handler runs.
    ///
    /// On any failure the handler never executes and the client gets
    /// `400 {"error": [FieldError, ...]}` with errors in rule declaration
    /// order. On success the buffered body is restored and the request
    /// continues down the stack, so handlers can rely on typed extractors
    /// succeeding for everything the rules cover.
    pub async fn enforce(&self, request: Request, next: Next) -> Response {
        let (mut parts, body) = request.into_parts();

        let params: HashMap<String, String> = match parts.extract::<RawPathParams>().await {
            Ok(raw) => raw
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            Err(_) => HashMap::new(),
        };

        let bytes = match to_bytes(body, BODY_LIMIT).await {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::warn!(%error, "failed to read request body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorMessage::new("Invalid request body")),
                )
                    .into_response();
            }
        };

        // An absent or malformed body still goes through validation; the
        // rules see it as null and report every field as missing.
        let body_json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        let mut accumulator = ErrorAccumulator::new();
        self.evaluate(
            &RequestInput {
                params: &params,
                body: &body_json,
            },
            &mut accumulator,
        );

        if !accumulator.is_empty() {
            tracing::debug!(errors = accumulator.len(), "request failed validation");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": accumulator.into_errors() })),
            )
                .into_response();
        }

        next.run(Request::from_parts(parts, Body::from(bytes))).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::rules::{body, param};
    use super::*;
    use axum::{
        Router,
        http::{self, StatusCode},
        middleware::from_fn,
        routing::{get, put},
    };
    use http_body_util::BodyExt;
    use std::sync::LazyLock;
    use tower::ServiceExt;

    static GET_RULES: LazyLock<RuleSet> =
        LazyLock::new(|| RuleSet::new().rule(param("id").int("ID not valid")));

    static PUT_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
        RuleSet::new()
            .rule(param("id").int("ID not valid"))
            .rule(body("name").non_empty_string("Product name not empty"))
    });

    fn router() -> Router {
        Router::new()
            .route(
                "/items/{id}",
                get(|| async { "ok" })
                    .layer(from_fn(|req: Request, next: Next| GET_RULES.enforce(req, next))),
            )
            .route(
                "/items/{id}",
                put(|axum::extract::Path(id): axum::extract::Path<i32>| async move {
                    format!("updated {id}")
                })
                .layer(from_fn(|req: Request, next: Next| PUT_RULES.enforce(req, next))),
            )
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_reaches_handler() {
        let response = router()
            .oneshot(
                http::Request::builder()
                    .uri("/items/7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_param_is_rejected_with_error_array() {
        let response = router()
            .oneshot(
                http::Request::builder()
                    .uri("/items/not-a-number")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        let errors = json["error"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["msg"], "ID not valid");
        assert_eq!(errors[0]["location"], "params");
    }

    #[tokio::test]
    async fn test_body_is_replayed_to_handler_after_validation() {
        let response = router()
            .oneshot(
                http::Request::builder()
                    .method(http::Method::PUT)
                    .uri("/items/3")
                    .header(http::header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"Monitor"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_body_reports_body_rules() {
        let response = router()
            .oneshot(
                http::Request::builder()
                    .method(http::Method::PUT)
                    .uri("/items/3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        let errors = json["error"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["msg"], "Product name not empty");
    }
}
