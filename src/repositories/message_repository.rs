//! In-memory message repository.
//!
//! Messages live in insertion order behind an async `RwLock`; reads sort a
//! snapshot of references and slice out the requested page.

use log::debug;
use tokio::sync::RwLock;

use crate::models::{LogMessage, SortField};
use crate::pagination::SortOrder;

/// Repository for log message storage.
#[derive(Default)]
pub struct MessageRepository {
    messages: RwLock<Vec<LogMessage>>,
}

impl MessageRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the store.
    pub async fn insert(&self, message: LogMessage) {
        let mut messages = self.messages.write().await;
        messages.push(message);
        debug!("Repository: Stored message #{}", messages.len());
    }

    /// Number of stored messages.
    pub async fn count(&self) -> u64 {
        self.messages.read().await.len() as u64
    }

    /// Read one page of messages sorted by `field` in `order`, together with
    /// the total number of messages, both under the same read guard.
    ///
    /// The sort is stable, so messages with equal keys keep insertion order.
    /// A page past the end of the data is empty.
    pub async fn find_page(
        &self,
        field: SortField,
        order: SortOrder,
        start: u64,
        limit: u64,
    ) -> (Vec<LogMessage>, u64) {
        debug!(
            "Repository: Finding messages sorted by {:?} {} from {} limit {}",
            field, order, start, limit
        );
        let messages = self.messages.read().await;

        let mut sorted: Vec<&LogMessage> = messages.iter().collect();
        sorted.sort_by(|a, b| match order {
            SortOrder::Ascending => field.compare(a, b),
            SortOrder::Descending => field.compare(b, a),
        });

        let start = usize::try_from(start).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        let page = sorted
            .into_iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();

        (page, messages.len() as u64)
    }
}
