//! Service identity endpoints.

use actix_web::{web, HttpResponse};

use crate::models::{ApiResponse, VersionResponse};
use crate::services::MessageService;

pub const VERSION: &str = "1.0.0";

/// Greeting from the logger
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Service greeting")
    )
)]
pub async fn get_root(message_service: web::Data<MessageService>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()>::message(message_service.get_root()))
}

/// Service version
#[utoipa::path(
    get,
    path = "/version",
    tag = "System",
    responses(
        (status = 200, description = "Service version", body = VersionResponse)
    )
)]
pub async fn get_version() -> HttpResponse {
    HttpResponse::Ok().json(VersionResponse {
        version: VERSION.to_string(),
    })
}
