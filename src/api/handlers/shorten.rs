//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::link_service::INVALID_URL_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short link for a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "Ab3dE9x",
///   "shortUrl": "http://localhost:5000/s/Ab3dE9x",
///   "original": "https://example.com/a",
///   "clicks": 0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, `url` is missing, or it is
/// not an absolute http(s) URL. Returns 500 if the store cannot persist.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::bad_request(
            INVALID_URL_MESSAGE,
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let url = request.url.unwrap_or_default();
    let short = state.link_service.shorten(&url).await?;

    Ok(Json(short.into()))
}
