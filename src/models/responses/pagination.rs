//! Pagination response models.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::models::LogMessage;
use crate::pagination::SortOrder;

/// Pagination block returned alongside a page of results
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    /// Total number of items across all pages
    pub count: u64,
    /// Zero-based page number
    pub page: u64,
    /// Items per page
    pub per_page: u64,
    /// Field the results are sorted on
    #[schema(example = "createdOn")]
    pub sort_by: String,
    pub order: SortOrder,
}

/// Paginated list of log messages
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedMessages {
    pub success: bool,
    pub message: String,
    pub data: Vec<LogMessage>,
    pub pagination: PaginationMetadata,
}

/// Result of synchronizing a search query with the request's pagination
#[derive(Debug, Serialize, ToSchema)]
pub struct QueryResponse {
    pub success: bool,
    pub message: String,
    /// Messages on the page the corrected query selects
    pub data: Vec<LogMessage>,
    pub pagination: PaginationMetadata,
    /// The corrected query document
    #[schema(value_type = Object)]
    pub query: Value,
}
