//! DTOs for the link listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::ShortLink;
use crate::utils::timestamp::serialize_millis;

/// One stored link as returned by `GET /api/urls`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlItem {
    pub code: String,
    pub original: String,
    pub clicks: u64,
    #[serde(serialize_with = "serialize_millis")]
    pub created_at: DateTime<Utc>,
    pub short_url: String,
}

impl From<ShortLink> for UrlItem {
    fn from(short: ShortLink) -> Self {
        Self {
            code: short.link.code,
            original: short.link.original,
            clicks: short.link.clicks,
            created_at: short.link.created_at,
            short_url: short.short_url,
        }
    }
}
