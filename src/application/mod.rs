//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and tooling.
//!
//! - [`services::link_service::LinkService`] - Short link creation, listing and resolution

pub mod services;
