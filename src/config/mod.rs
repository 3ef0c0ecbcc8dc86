use std::env;

use lazy_static::lazy_static;

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD};
use crate::pagination::{PaginationDefaults, SortOrder};

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub pagination: PaginationDefaults,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let per_page: u64 = env::var("DEFAULT_PER_PAGE")
            .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
            .parse()
            .expect("DEFAULT_PER_PAGE must be a valid number");
        let page: u64 = env::var("DEFAULT_PAGE")
            .unwrap_or_else(|_| DEFAULT_PAGE_NUMBER.to_string())
            .parse()
            .expect("DEFAULT_PAGE must be a valid number");
        let sort_by =
            env::var("DEFAULT_SORT_BY").unwrap_or_else(|_| DEFAULT_SORT_FIELD.to_string());
        let order: SortOrder = env::var("DEFAULT_ORDER")
            .unwrap_or_else(|_| SortOrder::default().to_string())
            .parse()
            .expect("DEFAULT_ORDER must be 'asc' or 'desc'");

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "14600".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            pagination: PaginationDefaults::new(page, per_page, sort_by, order)
                .expect("DEFAULT_PER_PAGE must be greater than zero"),
        }
    }
}
