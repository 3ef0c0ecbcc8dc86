//! Application constants module.
//!
//! Centralizes error messages, success messages, error codes and pagination
//! defaults used throughout the service.

pub mod error_codes;
pub mod errors;
pub mod messages;
pub mod pagination;

pub use error_codes::*;
pub use errors::*;
pub use messages::*;
pub use pagination::*;
