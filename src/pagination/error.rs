//! Errors raised while building or synchronizing pagination state.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// Input was not valid JSON, or not a JSON object at the top level.
    Decode(String),
    /// The request would produce an unusable page (zero size, negative offset, bad parameter).
    Validation(String),
    /// The corrected document could not be serialized.
    Encode(String),
}

impl fmt::Display for PaginationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginationError::Decode(message) => write!(f, "Decode error: {}", message),
            PaginationError::Validation(message) => write!(f, "Validation error: {}", message),
            PaginationError::Encode(message) => write!(f, "Encode error: {}", message),
        }
    }
}

impl std::error::Error for PaginationError {}
