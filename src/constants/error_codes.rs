//! Error code constants for API responses.
//!
//! These codes give API clients a machine-readable identifier for each error type.

pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const CODE_INVALID_JSON: &str = "INVALID_JSON";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
