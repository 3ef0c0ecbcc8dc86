//! Error message constants used throughout the application.

// Pagination errors
pub const ERR_INVALID_PER_PAGE: &str = "perPage must be a non-negative integer";
pub const ERR_INVALID_PAGE: &str = "page must be a non-negative integer";
pub const ERR_PAGE_OUT_OF_RANGE: &str = "page * perPage is past the addressable range";
pub const ERR_ZERO_PER_PAGE: &str = "perPage must be greater than zero";
pub const ERR_INVALID_ORDER: &str = "order must be either 'asc' or 'desc'";
pub const ERR_UNKNOWN_SORT_FIELD: &str = "Unknown sort field";

// Query document errors
pub const ERR_NOT_AN_OBJECT: &str = "Query document must be a JSON object";
pub const ERR_NON_POSITIVE_SIZE: &str = "Query size must be greater than zero";
pub const ERR_NEGATIVE_FROM: &str = "Query from must not be negative";

// Generic errors
pub const ERR_NOT_FOUND: &str = "Resource not found";
