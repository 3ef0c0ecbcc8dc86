//! pz-logger: a logging microservice with paginated message queries.

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod pagination;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
