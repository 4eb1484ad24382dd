//! Greeting, shutdown and fallback handlers.

use axum::{
    extract::State,
    http::{Method, Uri},
};

use crate::error::AppError;
use crate::state::AppState;

/// Static greeting.
///
/// # Endpoint
///
/// `GET /` and `GET /home`
pub async fn home_handler() -> &'static str {
    "Music App API - Hello world"
}

/// Asks the running server to stop accepting connections and exit.
///
/// In-flight requests, including this one, are allowed to complete.
///
/// # Endpoint
///
/// `POST /shutdown`
pub async fn shutdown_handler(State(state): State<AppState>) -> &'static str {
    state.shutdown.trigger();
    "Server shutting down..."
}

/// Renders unknown routes as a JSON 404.
pub async fn fallback_handler(uri: Uri) -> AppError {
    AppError::route_not_found(uri.path())
}

/// Renders a known path requested with an unsupported method as a JSON 405.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(method.as_str(), uri.path())
}
