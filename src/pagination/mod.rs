//! Pagination state and its reconciliation with raw search query documents.

pub mod error;
pub mod order;
pub mod state;
pub mod sync;

pub use error::*;
pub use order::*;
pub use state::*;
pub use sync::*;
