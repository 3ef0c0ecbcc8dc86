//! Sort direction for paged result sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::constants::ERR_INVALID_ORDER;
use crate::pagination::PaginationError;

/// Ascending (1, 2, 3) or descending (3, 2, 1) order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Descending
    }
}

impl SortOrder {
    /// The literal used in query strings and search documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(PaginationError::Validation(format!(
                "{}: '{}'",
                ERR_INVALID_ORDER, s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_order() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Ascending));
        assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Descending));
        assert!(matches!(
            "sideways".parse::<SortOrder>(),
            Err(PaginationError::Validation(_))
        ));
    }

    #[test]
    fn test_sort_order_serializes_as_literal() {
        assert_eq!(
            serde_json::to_string(&SortOrder::Ascending).unwrap(),
            "\"asc\""
        );
        assert_eq!(SortOrder::default().to_string(), "desc");
    }
}
