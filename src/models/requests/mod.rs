//! Request models for API endpoints.

pub mod query;

pub use query::*;
