//! Log message handlers: posting, listing and query synchronization.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};

use crate::constants::{MSG_MESSAGES_RETRIEVED, MSG_MESSAGE_STORED, MSG_QUERY_SYNCHRONIZED};
use crate::errors::ApiError;
use crate::models::{
    ApiResponse, LogMessage, PaginatedMessages, PaginationParams, QueryResponse,
};
use crate::pagination::{PaginationDefaults, PaginationState};
use crate::services::MessageService;

fn pagination_state(
    params: &PaginationParams,
    defaults: &PaginationDefaults,
) -> Result<PaginationState, ApiError> {
    PaginationState::from_params(params, defaults).map_err(|e| {
        warn!("Rejected pagination parameters {:?}: {}", params, e);
        ApiError::from(e)
    })
}

/// List log messages with pagination
#[utoipa::path(
    get,
    path = "/message",
    tag = "Messages",
    params(
        ("perPage" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("page" = Option<u64>, Query, description = "Zero-based page number (default: 0)"),
        ("sortBy" = Option<String>, Query, description = "Field to sort on (default: createdOn)"),
        ("order" = Option<String>, Query, description = "'asc' or 'desc' (default: desc)")
    ),
    responses(
        (status = 200, description = "Page of log messages", body = PaginatedMessages),
        (status = 400, description = "Invalid pagination parameters", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_messages(
    message_service: web::Data<MessageService>,
    defaults: web::Data<PaginationDefaults>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, ApiError> {
    let state = pagination_state(&query, &defaults)?;

    let (messages, count) = message_service.get_messages(&state).await?;
    debug!("Returning {} of {} messages ({})", messages.len(), count, state);

    Ok(HttpResponse::Ok().json(PaginatedMessages {
        success: true,
        message: MSG_MESSAGES_RETRIEVED.to_string(),
        data: messages,
        pagination: state.metadata(count),
    }))
}

/// Post a log message
#[utoipa::path(
    post,
    path = "/message",
    tag = "Messages",
    request_body = LogMessage,
    responses(
        (status = 201, description = "Message stored", body = LogMessage),
        (status = 400, description = "Malformed message", body = crate::models::ErrorResponse)
    )
)]
pub async fn post_message(
    message_service: web::Data<MessageService>,
    body: web::Json<LogMessage>,
) -> Result<HttpResponse, ApiError> {
    let stored = message_service.post_message(body.into_inner()).await;

    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_MESSAGE_STORED, stored)))
}

/// Synchronize a search query with the request's pagination
///
/// The body is a raw search query document. Its `size`, `from` and `sort`
/// are reconciled with the pagination parameters; the corrected document is
/// returned with the page of messages it selects.
#[utoipa::path(
    post,
    path = "/message/query",
    tag = "Messages",
    params(
        ("perPage" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("page" = Option<u64>, Query, description = "Zero-based page number (default: 0)"),
        ("sortBy" = Option<String>, Query, description = "Field to sort on (default: createdOn)"),
        ("order" = Option<String>, Query, description = "'asc' or 'desc' (default: desc)")
    ),
    responses(
        (status = 200, description = "Corrected query and page of messages", body = QueryResponse),
        (status = 400, description = "Malformed query or pagination", body = crate::models::ErrorResponse)
    )
)]
pub async fn query_messages(
    message_service: web::Data<MessageService>,
    defaults: web::Data<PaginationDefaults>,
    query: web::Query<PaginationParams>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let mut state = pagination_state(&query, &defaults)?;

    let (corrected, messages, count) = message_service
        .query_messages(&mut state, &body)
        .await
        .map_err(|e| {
            warn!("Query synchronization failed: {}", e);
            e
        })?;
    info!("Synchronized query: {}", state);

    Ok(HttpResponse::Ok().json(QueryResponse {
        success: true,
        message: MSG_QUERY_SYNCHRONIZED.to_string(),
        data: messages,
        pagination: state.metadata(count),
        query: corrected,
    }))
}
