//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, SubsecRound, Utc};

/// A shortened URL and its click counter.
///
/// `code` and `created_at` never change after creation; `clicks` only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub original: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a Link instance.
    pub fn new(code: String, original: String, clicks: u64, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            original,
            clicks,
            created_at,
        }
    }

    /// Creates a never-clicked link stamped with the current time.
    ///
    /// The timestamp is truncated to milliseconds, the precision of the
    /// persisted `createdAt` field.
    pub fn fresh(new_link: NewLink) -> Self {
        Self::new(
            new_link.code,
            new_link.original,
            0,
            Utc::now().trunc_subsecs(3),
        )
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub original: String,
}
