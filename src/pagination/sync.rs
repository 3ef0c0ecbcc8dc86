//! Reconciliation of a [`PaginationState`] with a raw search query document.
//!
//! Explicit `size`/`from`/`sort` values in the document win; the state fills in
//! whatever the document leaves out. A numeric `from` is snapped down to a page
//! boundary and fed back into the state's page number.

use std::num::NonZeroU64;

use log::debug;
use serde_json::{Map, Value};

use crate::constants::{
    ERR_NEGATIVE_FROM, ERR_NON_POSITIVE_SIZE, ERR_NOT_AN_OBJECT, ERR_PAGE_OUT_OF_RANGE,
};
use crate::pagination::{PaginationError, PaginationState};

const SIZE_KEY: &str = "size";
const FROM_KEY: &str = "from";
const SORT_KEY: &str = "sort";

/// Synchronize `state` with the JSON query document in `raw`.
///
/// Returns the corrected document. On error `state` is left untouched.
pub fn synchronize(state: &mut PaginationState, raw: &[u8]) -> Result<String, PaginationError> {
    state.synchronize(raw)
}

/// Decode a raw query document, insisting on a JSON object at the top level.
pub fn decode_document(raw: &[u8]) -> Result<Map<String, Value>, PaginationError> {
    let value: Value =
        serde_json::from_slice(raw).map_err(|e| PaginationError::Decode(e.to_string()))?;

    match value {
        Value::Object(document) => Ok(document),
        other => Err(PaginationError::Decode(format!(
            "{}, found {}",
            ERR_NOT_AN_OBJECT,
            json_kind(&other)
        ))),
    }
}

impl PaginationState {
    /// Byte-level form of [`PaginationState::synchronize_document`].
    pub fn synchronize(&mut self, raw: &[u8]) -> Result<String, PaginationError> {
        let document = decode_document(raw)?;
        let corrected = self.synchronize_document(document)?;

        serde_json::to_string(&Value::Object(corrected))
            .map_err(|e| PaginationError::Encode(e.to_string()))
    }

    /// Reconcile `size`, then `from`, then `sort`. `from` depends on the
    /// reconciled `size`, so the order is fixed.
    pub fn synchronize_document(
        &mut self,
        mut document: Map<String, Value>,
    ) -> Result<Map<String, Value>, PaginationError> {
        let mut next = self.clone();
        next.sync_size(&mut document)?;
        next.sync_from(&mut document)?;
        next.sync_sort(&mut document);

        *self = next;
        Ok(document)
    }

    fn sync_size(&mut self, document: &mut Map<String, Value>) -> Result<(), PaginationError> {
        match whole_number(document, SIZE_KEY) {
            Some(size) if size < 1 => {
                return Err(PaginationError::Validation(format!(
                    "{}: {}",
                    ERR_NON_POSITIVE_SIZE, size
                )));
            }
            Some(size) => {
                let size = u64::try_from(size).unwrap_or(u64::MAX);
                self.per_page = NonZeroU64::new(size).unwrap_or(NonZeroU64::MIN);
            }
            None => debug!("Query has no usable size, using perPage={}", self.per_page),
        }

        document.insert(SIZE_KEY.to_string(), Value::from(self.per_page.get()));
        Ok(())
    }

    fn sync_from(&mut self, document: &mut Map<String, Value>) -> Result<(), PaginationError> {
        let per_page = self.per_page.get();
        let aligned = match whole_number(document, FROM_KEY) {
            Some(from) if from < 0 => {
                return Err(PaginationError::Validation(format!(
                    "{}: {}",
                    ERR_NEGATIVE_FROM, from
                )));
            }
            Some(from) => {
                let from = u64::try_from(from).unwrap_or(u64::MAX);
                let aligned = from - from % per_page;
                if aligned != from {
                    debug!("Aligning from={} down to page boundary {}", from, aligned);
                }
                self.page = aligned / per_page;
                aligned
            }
            None => self.page.checked_mul(per_page).ok_or_else(|| {
                PaginationError::Validation(format!(
                    "{}: page={} perPage={}",
                    ERR_PAGE_OUT_OF_RANGE, self.page, per_page
                ))
            })?,
        };

        document.insert(FROM_KEY.to_string(), Value::from(aligned));
        Ok(())
    }

    fn sync_sort(&self, document: &mut Map<String, Value>) {
        if !matches!(document.get(SORT_KEY), None | Some(Value::Null)) {
            return;
        }

        let mut clause = Map::new();
        clause.insert(self.sort_by.clone(), Value::from(self.order.as_str()));
        document.insert(
            SORT_KEY.to_string(),
            Value::Array(vec![Value::Object(clause)]),
        );
    }
}

/// A present, numeric value under `key`, truncated toward zero. Missing, null
/// and non-numeric values all count as absent.
///
/// Integers are read exactly; only fractional values go through `f64`.
fn whole_number(document: &Map<String, Value>, key: &str) -> Option<i128> {
    let value = document.get(key)?;
    if let Some(n) = value.as_u64() {
        return Some(i128::from(n));
    }
    if let Some(n) = value.as_i64() {
        return Some(i128::from(n));
    }
    // `as` saturates out-of-range floats
    value.as_f64().map(|n| n.trunc() as i128)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
