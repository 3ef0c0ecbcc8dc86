//! HTTP request handlers organized by domain.

pub mod admin_handler;
pub mod message_handler;
pub mod system_handler;

pub use admin_handler::*;
pub use message_handler::*;
pub use system_handler::*;
