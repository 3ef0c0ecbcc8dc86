use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::constants::ERR_UNKNOWN_SORT_FIELD;
use crate::pagination::PaginationError;

/// Severity of a log message, least to most severe
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ToSchema)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Debug => "Debug",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Fatal => "Fatal",
        };
        f.write_str(name)
    }
}

/// A single log message posted by a client service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogMessage {
    /// Name of the reporting service
    #[schema(example = "log-tester")]
    pub service: String,
    /// Address of the reporting host
    #[schema(example = "128.1.2.3")]
    pub address: String,
    /// Client-supplied timestamp, stored as given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "2007-04-05T14:30Z")]
    pub time: Option<String>,
    /// When the logger stored the message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    pub severity: Severity,
    #[schema(example = "The quick brown fox")]
    pub message: String,
}

/// Message fields results can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Service,
    Address,
    Time,
    CreatedOn,
    Severity,
    Message,
}

impl SortField {
    pub fn compare(&self, a: &LogMessage, b: &LogMessage) -> Ordering {
        match self {
            SortField::Service => a.service.cmp(&b.service),
            SortField::Address => a.address.cmp(&b.address),
            SortField::Time => a.time.cmp(&b.time),
            SortField::CreatedOn => a.created_on.cmp(&b.created_on),
            SortField::Severity => a.severity.cmp(&b.severity),
            SortField::Message => a.message.cmp(&b.message),
        }
    }
}

impl FromStr for SortField {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "service" => Ok(SortField::Service),
            "address" => Ok(SortField::Address),
            "time" => Ok(SortField::Time),
            "createdOn" => Ok(SortField::CreatedOn),
            "severity" => Ok(SortField::Severity),
            "message" => Ok(SortField::Message),
            _ => Err(PaginationError::Validation(format!(
                "{}: '{}'",
                ERR_UNKNOWN_SORT_FIELD, s
            ))),
        }
    }
}
