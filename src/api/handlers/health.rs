//! Handlers for liveness and health endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthResponse, ServiceStatus, StoreCheck, StoreStatus};
use crate::state::AppState;

/// Plain-text liveness message served at `GET /`.
pub const LIVENESS_MESSAGE: &str = "URL Shortener backend is running.";

/// Returns a fixed liveness string.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> &'static str {
    LIVENESS_MESSAGE
}

/// Reports whether the store's data file is in place.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: the data file exists and is a regular file
/// - **503 Service Unavailable**: the data file is gone or not a file; the
///   in-memory links are no longer backed by disk until the next write
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "3 links in data.json" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse::from_store(check_store(&state).await);

    let code = match response.status {
        ServiceStatus::Healthy => StatusCode::OK,
        ServiceStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    (code, Json(response))
}

async fn check_store(state: &AppState) -> StoreCheck {
    let path = state.data_file.display();

    match tokio::fs::metadata(&state.data_file).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            return StoreCheck {
                status: StoreStatus::Error,
                message: format!("{} is not a regular file", path),
            };
        }
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "Data file check failed");
            return StoreCheck {
                status: StoreStatus::Error,
                message: format!("Cannot stat {}: {}", path, e),
            };
        }
    }

    match state.link_service.count().await {
        Ok(count) => StoreCheck {
            status: StoreStatus::Ok,
            message: format!("{} links in {}", count, path),
        },
        Err(e) => StoreCheck {
            status: StoreStatus::Error,
            message: format!("Store error: {}", e),
        },
    }
}
