//! File-backed repository implementations.
//!
//! - [`JsonLinkRepository`] - Link storage mirrored to a single JSON document

pub mod document;
pub mod error;
pub mod json_link_repository;

pub use error::StorageError;
pub use json_link_repository::{JsonLinkRepository, read_links};
