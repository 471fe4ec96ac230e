//! Handler for listing all links.

use axum::{Json, extract::State};

use crate::api::dto::urls::UrlItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored link in creation order.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// # Response
///
/// ```json
/// [
///   {
///     "code": "Ab3dE9x",
///     "original": "https://example.com/a",
///     "clicks": 1,
///     "createdAt": "2024-05-01T12:00:00.000Z",
///     "shortUrl": "http://localhost:5000/s/Ab3dE9x"
///   }
/// ]
/// ```
pub async fn urls_handler(State(state): State<AppState>) -> Result<Json<Vec<UrlItem>>, AppError> {
    let links = state.link_service.list().await?;
    Ok(Json(links.into_iter().map(UrlItem::from).collect()))
}
