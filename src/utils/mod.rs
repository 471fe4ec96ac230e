//! Helpers shared across layers.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - http/https URL validation
//! - [`timestamp`] - Millisecond RFC 3339 serialization

pub mod code_generator;
pub mod timestamp;
pub mod url_validator;
