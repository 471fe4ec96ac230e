//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

use crate::application::services::ShortLink;

/// Request to shorten a URL.
///
/// `url` is optional so a missing field is reported as an invalid URL rather
/// than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,
}

/// A created or already existing short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub original: String,
    pub clicks: u64,
}

impl From<ShortLink> for ShortenResponse {
    fn from(short: ShortLink) -> Self {
        Self {
            code: short.link.code,
            short_url: short.short_url,
            original: short.link.original,
            clicks: short.link.clicks,
        }
    }
}
