//! Application state management

use database::postgres::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// `None` when the API runs on the in-memory repository.
    pub db: Option<DatabaseConnection>,
}
