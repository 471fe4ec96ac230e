//! Infrastructure layer implementing the domain repository traits.
//!
//! - [`persistence`] - JSON file store

pub mod persistence;
