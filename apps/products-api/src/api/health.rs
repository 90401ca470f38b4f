//! Readiness endpoint

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

/// Readiness probe. Reports the database connection state when one is
/// configured; with the in-memory repository there is nothing to check.
async fn ready(State(state): State<AppState>) -> Response {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();

    if let Some(db) = &state.db {
        checks.push((
            "database",
            Box::pin(async move {
                database::postgres::check_health(db)
                    .await
                    .map_err(|e| e.to_string())
            }),
        ));
    }

    match run_health_checks(checks).await {
        Ok(response) => response.into_response(),
        Err(response) => response.into_response(),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
}
