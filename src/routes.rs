//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Liveness string
//! - `GET  /health`      - Health check with store status
//! - `GET  /s/{code}`    - Short link redirect
//! - `/api/*`            - JSON API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin allowed on every response

use crate::api;
use crate::api::handlers::{health_handler, index_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/s/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(tracing::layer())
                .layer(cors::layer()),
        )
}
