//! Admin handlers.

use actix_web::{web, HttpResponse};
use log::debug;

use crate::constants::MSG_LOGGER_STATISTICS;
use crate::errors::ApiError;
use crate::models::{ApiResponse, LoggerStats};
use crate::services::MessageService;

/// Get logger statistics
///
/// Returns the number of stored messages and the service start time.
#[utoipa::path(
    get,
    path = "/admin/stats",
    tag = "Admin",
    responses(
        (status = 200, description = "Logger statistics", body = LoggerStats)
    )
)]
pub async fn get_stats(
    message_service: web::Data<MessageService>,
) -> Result<HttpResponse, ApiError> {
    let stats: LoggerStats = message_service.get_stats().await;
    debug!("Logger holds {} messages", stats.num_messages);

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_LOGGER_STATISTICS, stats)))
}
