//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the code-to-link mapping.
///
/// Implementations must serialize mutations with each other and with their
/// persistence writes, and readers must never observe a half-applied write.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonLinkRepository`] - JSON file store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with zero clicks and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Internal`] if persisting fails; the insert is then
    /// not applied.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds the first link (in insertion order) whose original URL equals
    /// `original` exactly.
    async fn find_by_original_url(&self, original: &str) -> Result<Option<Link>, AppError>;

    /// Increments the click counter of `code` by one and persists it.
    ///
    /// Returns `Ok(None)` without touching anything when the code is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if persisting fails; the counter is then
    /// left unchanged.
    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links in insertion order.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Number of stored links.
    async fn count(&self) -> Result<usize, AppError>;
}
