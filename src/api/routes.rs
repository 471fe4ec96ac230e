//! API route configuration.

use crate::api::handlers::{shorten_handler, urls_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create (or fetch) the short link for a URL
/// - `GET  /urls`    - List all links
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(urls_handler))
}
