//! Data models organized by type.

pub mod message;
pub mod requests;
pub mod responses;

pub use message::*;
pub use requests::*;
pub use responses::*;
