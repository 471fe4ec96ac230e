//! # tinylink
//!
//! A small URL shortening service built with Axum, backed by a single JSON
//! data file.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity and the repository trait
//! - **Application Layer** ([`application`]) - Validation, deduplication and code allocation
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file store
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Behaviour
//!
//! - Shortening the same URL twice returns the same code
//! - Codes are 7 random alphanumeric characters, checked for collisions
//! - Every new link and every click is written to disk before the response
//!
//! ## Quick Start
//!
//! ```bash
//! export PORT=5000
//! export BASE_URL="http://localhost:5000"
//! export DATA_FILE="data.json"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, ShortLink};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::JsonLinkRepository;
    pub use crate::state::AppState;
}
