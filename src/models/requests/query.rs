//! Raw pagination parameters as they arrive on the query string.

use serde::Deserialize;

/// Query-string pagination parameters.
///
/// Kept as strings so malformed values surface as validation errors in the
/// API envelope instead of actix-web's default query rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub order: Option<String>,
}
