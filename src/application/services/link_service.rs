//! Link shortening, listing and resolution service.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_url;

/// Message returned for every rejected URL.
pub const INVALID_URL_MESSAGE: &str = "Invalid URL. Include http:// or https://";

/// Message returned for unknown short codes.
pub const NOT_FOUND_MESSAGE: &str = "Short URL not found";

/// Path segment under which short links are served.
pub const REDIRECT_PATH: &str = "/s/";

/// Attempts at finding a free code before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// A link together with its externally visible short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub link: Link,
    pub short_url: String,
}

/// Service for creating, listing and resolving short links.
///
/// Validates input, deduplicates on the exact original URL and allocates
/// random codes with a collision check before insert.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    base_url: String,
    /// Makes lookup-then-insert in [`Self::shorten`] atomic.
    creation_lock: Arc<Mutex<()>>,
}

impl<L: LinkRepository + 'static> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin short URLs are built on; a trailing
    /// slash is ignored.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            link_repository,
            base_url,
            creation_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the short link for `url`, creating it if needed.
    ///
    /// Shortening the same URL again returns the existing record untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `url` is not an absolute http(s)
    /// URL, and [`AppError::Internal`] if no free code was found or the store
    /// failed to persist.
    pub async fn shorten(&self, url: &str) -> Result<ShortLink, AppError> {
        validate_url(url).map_err(|e| {
            AppError::bad_request(INVALID_URL_MESSAGE, json!({ "reason": e.to_string() }))
        })?;

        let repository = Arc::clone(&self.link_repository);
        let creation_lock = Arc::clone(&self.creation_lock);
        let url = url.to_string();

        // Spawned so the lock is held until the insert has committed, even if
        // the request is dropped midway.
        let task: JoinHandle<Result<Link, AppError>> = tokio::spawn(async move {
            let _guard = creation_lock.lock().await;

            if let Some(existing) = repository.find_by_original_url(&url).await? {
                tracing::debug!(code = %existing.code, "URL already shortened");
                return Ok(existing);
            }

            let code = generate_unique_code(repository.as_ref()).await?;

            let link = repository
                .insert(NewLink {
                    code,
                    original: url,
                })
                .await?;

            tracing::info!(code = %link.code, original = %link.original, "Created short link");
            Ok(link)
        });

        let link = task.await.map_err(|e| {
            AppError::internal("Shorten task failed", json!({ "error": e.to_string() }))
        })??;

        Ok(self.with_short_url(link))
    }

    /// Lists all links with their short URLs, oldest first.
    pub async fn list(&self) -> Result<Vec<ShortLink>, AppError> {
        let links = self.link_repository.list().await?;
        Ok(links
            .into_iter()
            .map(|link| self.with_short_url(link))
            .collect())
    }

    /// Counts a visit to `code` and returns its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes (nothing is counted)
    /// and [`AppError::Internal`] if the click could not be persisted.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.link_repository
            .record_click(code)
            .await?
            .map(|link| link.original)
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE, json!({ "code": code })))
    }

    /// Number of stored links.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}{}{}", self.base_url, REDIRECT_PATH, code)
    }

    fn with_short_url(&self, link: Link) -> ShortLink {
        ShortLink {
            short_url: self.short_url(&link.code),
            link,
        }
    }

}

/// Generates a code not yet present in the store.
async fn generate_unique_code<L: LinkRepository>(repository: &L) -> Result<String, AppError> {
    for attempt in 0..MAX_CODE_ATTEMPTS {
        let code = generate_code();

        if repository.find_by_code(&code).await?.is_none() {
            return Ok(code);
        }

        tracing::warn!(attempt, code = %code, "Code collision, retrying");
    }

    Err(AppError::internal(
        "Failed to generate unique code",
        json!({ "reason": "Too many collisions" }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::utils::code_generator::CODE_LENGTH;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn create_test_link(code: &str, url: &str, clicks: u64) -> Link {
        Link::new(code.to_string(), url.to_string(), clicks, Utc::now())
    }

    fn service(repo: MockLinkRepository) -> LinkService<MockLinkRepository> {
        LinkService::new(Arc::new(repo), "http://localhost:5000/")
    }

    #[tokio::test]
    async fn test_shorten_creates_link() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_original_url()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert()
            .withf(|new_link| {
                new_link.original == "https://example.com" && new_link.code.len() == CODE_LENGTH
            })
            .times(1)
            .returning(|new_link| Ok(create_test_link(&new_link.code, &new_link.original, 0)));

        let result = service(mock_repo).shorten("https://example.com").await;

        let short = result.unwrap();
        assert_eq!(short.link.original, "https://example.com");
        assert_eq!(short.link.clicks, 0);
        assert_eq!(
            short.short_url,
            format!("http://localhost:5000/s/{}", short.link.code)
        );
    }

    #[tokio::test]
    async fn test_shorten_deduplication() {
        let mut mock_repo = MockLinkRepository::new();

        let existing = create_test_link("exist12", "https://example.com", 4);
        mock_repo
            .expect_find_by_original_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        mock_repo.expect_find_by_code().times(0);
        mock_repo.expect_insert().times(0);

        let short = service(mock_repo)
            .shorten("https://example.com")
            .await
            .unwrap();

        assert_eq!(short.link.code, "exist12");
        assert_eq!(short.link.clicks, 4);
        assert_eq!(short.short_url, "http://localhost:5000/s/exist12");
    }

    #[tokio::test]
    async fn test_shorten_invalid_url() {
        for input in ["not-a-url", "", "ftp://x.com"] {
            let mut mock_repo = MockLinkRepository::new();
            mock_repo.expect_find_by_original_url().times(0);
            mock_repo.expect_insert().times(0);

            let result = service(mock_repo).shorten(input).await;

            match result {
                Err(AppError::Validation { message, .. }) => {
                    assert_eq!(message, INVALID_URL_MESSAGE)
                }
                other => panic!("expected validation error for {input:?}, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_shorten_retries_on_collision() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_original_url()
            .returning(|_| Ok(None));

        let lookups = Arc::new(AtomicUsize::new(0));
        let counter = lookups.clone();
        mock_repo.expect_find_by_code().returning(move |code| {
            // First two candidates are taken.
            if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                Ok(Some(create_test_link(code, "https://taken.com", 0)))
            } else {
                Ok(None)
            }
        });

        mock_repo
            .expect_insert()
            .times(1)
            .returning(|new_link| Ok(create_test_link(&new_link.code, &new_link.original, 0)));

        let result = service(mock_repo).shorten("https://example.com").await;

        assert!(result.is_ok());
        assert_eq!(lookups.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_shorten_gives_up_after_max_collisions() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_original_url()
            .returning(|_| Ok(None));
        mock_repo
            .expect_find_by_code()
            .times(MAX_CODE_ATTEMPTS)
            .returning(|code| Ok(Some(create_test_link(code, "https://taken.com", 0))));
        mock_repo.expect_insert().times(0);

        let result = service(mock_repo).shorten("https://example.com").await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_resolve_returns_original() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_record_click()
            .withf(|code| code == "abc1234")
            .times(1)
            .returning(|code| Ok(Some(create_test_link(code, "https://example.com/a", 1))));

        let original = service(mock_repo).resolve("abc1234").await.unwrap();

        assert_eq!(original, "https://example.com/a");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_record_click()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo).resolve("missing").await;

        match result {
            Err(AppError::NotFound { message, .. }) => assert_eq!(message, NOT_FOUND_MESSAGE),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_adds_short_urls_in_order() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_list().times(1).returning(|| {
            Ok(vec![
                create_test_link("first01", "https://a.com", 0),
                create_test_link("second2", "https://b.com", 2),
            ])
        });

        let items = service(mock_repo).list().await.unwrap();

        let urls: Vec<&str> = items.iter().map(|i| i.short_url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "http://localhost:5000/s/first01",
                "http://localhost:5000/s/second2"
            ]
        );
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let svc = LinkService::new(Arc::new(MockLinkRepository::new()), "https://sho.rt///");
        assert_eq!(svc.short_url("abc1234"), "https://sho.rt/s/abc1234");
    }
}
