//! Pagination constants for list endpoints.

/// Default number of items per page when not specified in the request.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Default starting page number (zero-based).
pub const DEFAULT_PAGE_NUMBER: u64 = 0;

/// Default field to sort messages on.
pub const DEFAULT_SORT_FIELD: &str = "createdOn";
