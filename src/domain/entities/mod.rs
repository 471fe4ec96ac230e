//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! - [`Link`] - A shortened URL mapping with its click counter
//! - [`NewLink`] - Input for creating a link

pub mod link;

pub use link::{Link, NewLink};
