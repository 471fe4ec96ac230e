//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the visit.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// The click is persisted before the redirect is sent.
///
/// # Errors
///
/// Returns 404 Not Found (plain text) if the code does not exist.
/// Returns 500 if the click could not be persisted.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original = state.link_service.resolve(&code).await?;

    tracing::debug!(code = %code, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, original)]))
}
