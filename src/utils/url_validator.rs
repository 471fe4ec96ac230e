//! Validation of URLs submitted for shortening.

use url::Url;

/// Reasons a URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Checks that `input` is an absolute URL with an `http` or `https` scheme.
///
/// The input is not rewritten: deduplication compares the exact string the
/// caller submitted.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for an empty string,
/// [`UrlValidationError::InvalidFormat`] if it does not parse as an absolute
/// URL, and [`UrlValidationError::UnsupportedProtocol`] for any other scheme
/// (`ftp:`, `javascript:`, `data:`, `file:` ...).
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}
