use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use pz_logger::config::CONFIG;
use pz_logger::routes;
use pz_logger::services::MessageService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let message_service = web::Data::new(MessageService::new());
    let pagination_defaults = web::Data::new(CONFIG.pagination.clone());
    info!(
        "Default pagination: perPage={} page={} sortBy={} order={}",
        CONFIG.pagination.per_page,
        CONFIG.pagination.page,
        CONFIG.pagination.sort_by,
        CONFIG.pagination.order
    );

    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting pz-logger at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(message_service.clone())
            .app_data(pagination_defaults.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
