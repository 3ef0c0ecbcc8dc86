//! Admin statistics models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Logger statistics
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoggerStats {
    /// Number of messages stored since startup
    pub num_messages: u64,
    /// When the service started
    pub start_time: DateTime<Utc>,
}
