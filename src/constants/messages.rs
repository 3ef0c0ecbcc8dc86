//! Success message constants used throughout the application.

pub const MSG_ROOT: &str = "Hi. I'm pz-logger.";

// Message endpoints
pub const MSG_MESSAGE_STORED: &str = "Message stored";
pub const MSG_MESSAGES_RETRIEVED: &str = "Messages retrieved";
pub const MSG_QUERY_SYNCHRONIZED: &str = "Query synchronized";

// Admin
pub const MSG_LOGGER_STATISTICS: &str = "Logger statistics";
