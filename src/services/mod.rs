//! Services organized by domain concern.

pub mod message_service;

pub use message_service::MessageService;
