//! On-disk layout of the link store.
//!
//! ```json
//! {
//!   "urls": {
//!     "Ab3dE9x": {
//!       "original": "https://example.com/a",
//!       "clicks": 1,
//!       "createdAt": "2024-05-01T12:00:00.000Z"
//!     }
//!   }
//! }
//! ```
//!
//! `urls` is kept as a list of pairs in memory so the object keys are written
//! and read back in insertion order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{Map, serde_as};

use crate::domain::entities::Link;
use crate::utils::timestamp::serialize_millis;

#[serde_as]
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LinkDocument {
    #[serde_as(as = "Map<_, _>")]
    pub urls: Vec<(String, StoredLink)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLink {
    pub original: String,
    /// Older files may omit the counter.
    #[serde(default)]
    pub clicks: u64,
    #[serde(serialize_with = "serialize_millis")]
    pub created_at: DateTime<Utc>,
}

impl StoredLink {
    pub fn into_link(self, code: String) -> Link {
        Link::new(code, self.original, self.clicks, self.created_at)
    }
}

impl From<&Link> for StoredLink {
    fn from(link: &Link) -> Self {
        Self {
            original: link.original.clone(),
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}

impl LinkDocument {
    pub fn from_links<'a>(links: impl IntoIterator<Item = &'a Link>) -> Self {
        Self {
            urls: links
                .into_iter()
                .map(|link| (link.code.clone(), StoredLink::from(link)))
                .collect(),
        }
    }
}
