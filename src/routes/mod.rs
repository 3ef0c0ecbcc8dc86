use actix_web::{error, web, HttpRequest, HttpResponse};
use log::warn;
use utoipa::OpenApi;

use crate::constants::ERR_NOT_FOUND;
use crate::errors::ApiError;
use crate::handlers;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Service identity
        .route("/", web::get().to(handlers::get_root))
        .route("/version", web::get().to(handlers::get_version))
        // Log messages
        .service(
            web::scope("/message")
                .route("", web::get().to(handlers::get_messages))
                .route("", web::post().to(handlers::post_message))
                // Synchronize a raw search query with pagination parameters
                .route("/query", web::post().to(handlers::query_messages)),
        )
        // Admin
        .service(web::scope("/admin").route("/stats", web::get().to(handlers::get_stats)))
        // OpenAPI document
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        .default_service(web::to(not_found));
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    warn!("Rejected message body: {}", err);
    ApiError::InvalidJson(err.to_string()).into()
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound(format!("{}: {}", ERR_NOT_FOUND, req.path())))
}
