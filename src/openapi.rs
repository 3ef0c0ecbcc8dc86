use utoipa::OpenApi;

use crate::models::{
    ErrorResponse, LogMessage, LoggerStats, PaginatedMessages, PaginationMetadata,
    QueryResponse, Severity, VersionResponse,
};
use crate::pagination::SortOrder;

/// OpenAPI documentation for the logger API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "pz-logger",
        version = "1.0.0",
        description = "Logging service: post log messages and page through them, optionally driven by a search query document.",
        license(name = "Apache-2.0", url = "https://www.apache.org/licenses/LICENSE-2.0")
    ),
    tags(
        (name = "System", description = "Service identity endpoints"),
        (name = "Messages", description = "Posting, listing and querying log messages"),
        (name = "Admin", description = "Service statistics")
    ),
    paths(
        crate::handlers::get_root,
        crate::handlers::get_version,
        crate::handlers::get_messages,
        crate::handlers::post_message,
        crate::handlers::query_messages,
        crate::handlers::get_stats
    ),
    components(
        schemas(
            LogMessage,
            Severity,
            SortOrder,
            PaginationMetadata,
            PaginatedMessages,
            QueryResponse,
            LoggerStats,
            VersionResponse,
            ErrorResponse
        )
    )
)]
pub struct ApiDoc;
