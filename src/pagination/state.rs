//! Caller-side pagination state built from query-string parameters.

use std::fmt;
use std::num::NonZeroU64;

use crate::constants::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD, ERR_INVALID_PAGE,
    ERR_INVALID_PER_PAGE, ERR_PAGE_OUT_OF_RANGE, ERR_ZERO_PER_PAGE,
};
use crate::models::{PaginationMetadata, PaginationParams};
use crate::pagination::{PaginationError, SortOrder};

/// Default pagination values applied when a request leaves a parameter out.
///
/// Built once from configuration and handed to the handlers as app data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationDefaults {
    pub page: u64,
    pub per_page: NonZeroU64,
    pub sort_by: String,
    pub order: SortOrder,
}

impl PaginationDefaults {
    pub fn new(
        page: u64,
        per_page: u64,
        sort_by: impl Into<String>,
        order: SortOrder,
    ) -> Result<Self, PaginationError> {
        let per_page = NonZeroU64::new(per_page)
            .ok_or_else(|| PaginationError::Validation(ERR_ZERO_PER_PAGE.to_string()))?;
        Ok(Self {
            page,
            per_page,
            sort_by: sort_by.into(),
            order,
        })
    }
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: NonZeroU64::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroU64::MIN),
            sort_by: DEFAULT_SORT_FIELD.to_string(),
            order: SortOrder::Descending,
        }
    }
}

/// The caller's requested view into an ordered, paged result set.
///
/// `per_page` is never zero, so index arithmetic on it cannot divide by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    pub(crate) page: u64,
    pub(crate) per_page: NonZeroU64,
    pub(crate) sort_by: String,
    pub(crate) order: SortOrder,
}

impl PaginationState {
    pub fn new(
        page: u64,
        per_page: u64,
        sort_by: impl Into<String>,
        order: SortOrder,
    ) -> Result<Self, PaginationError> {
        let per_page = NonZeroU64::new(per_page)
            .ok_or_else(|| PaginationError::Validation(ERR_ZERO_PER_PAGE.to_string()))?;
        if page.checked_mul(per_page.get()).is_none() {
            return Err(PaginationError::Validation(format!(
                "{}: page={} perPage={}",
                ERR_PAGE_OUT_OF_RANGE, page, per_page
            )));
        }
        Ok(Self {
            page,
            per_page,
            sort_by: sort_by.into(),
            order,
        })
    }

    /// Build a state from raw query-string parameters, falling back to `defaults`
    /// for anything absent or empty.
    pub fn from_params(
        params: &PaginationParams,
        defaults: &PaginationDefaults,
    ) -> Result<Self, PaginationError> {
        let per_page = parse_count(
            params.per_page.as_deref(),
            defaults.per_page.get(),
            ERR_INVALID_PER_PAGE,
        )?;
        let page = parse_count(params.page.as_deref(), defaults.page, ERR_INVALID_PAGE)?;

        let sort_by = match non_empty(params.sort_by.as_deref()) {
            Some(sort_by) => sort_by.to_string(),
            None => defaults.sort_by.clone(),
        };

        let order = match non_empty(params.order.as_deref()) {
            Some(order) => order.parse()?,
            None => defaults.order,
        };

        Self::new(page, per_page, sort_by, order)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page.get()
    }

    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Index of the first element on the requested page.
    ///
    /// Construction and synchronization both reject states where this overflows.
    pub fn start_index(&self) -> u64 {
        self.page.saturating_mul(self.per_page.get())
    }

    /// Index one past the last element on the requested page.
    pub fn end_index(&self) -> u64 {
        self.start_index().saturating_add(self.per_page.get())
    }

    /// Pagination block for a response listing `count` total items.
    pub fn metadata(&self, count: u64) -> PaginationMetadata {
        PaginationMetadata {
            count,
            page: self.page,
            per_page: self.per_page.get(),
            sort_by: self.sort_by.clone(),
            order: self.order,
        }
    }
}

impl fmt::Display for PaginationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "perPage={}&page={}&sortBy={}&order={}",
            self.per_page, self.page, self.sort_by, self.order
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_count(raw: Option<&str>, default: u64, error: &str) -> Result<u64, PaginationError> {
    match non_empty(raw) {
        Some(value) => value
            .parse::<u64>()
            .map_err(|_| PaginationError::Validation(format!("{}: '{}'", error, value))),
        None => Ok(default),
    }
}
