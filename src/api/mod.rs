//! HTTP API layer.
//!
//! Translates HTTP requests into service calls and formats responses.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and request tracing
//! - [`routes`] - API route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
