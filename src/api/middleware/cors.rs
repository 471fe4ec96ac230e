//! Cross-origin resource sharing policy.

use axum::http::header;
use tower_http::cors::{Any, CorsLayer};

/// Allows any origin, method and the `Content-Type` request header.
///
/// Adds `Access-Control-Allow-Origin: *` to every response and answers
/// preflight requests.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([header::CONTENT_TYPE])
}
