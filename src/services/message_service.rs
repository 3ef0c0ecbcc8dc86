//! Message service: storing log messages, paging through them, and
//! synchronizing raw search queries with request pagination.

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::constants::MSG_ROOT;
use crate::errors::ApiError;
use crate::models::{LogMessage, LoggerStats, SortField};
use crate::pagination::{decode_document, PaginationState, SortOrder};
use crate::repositories::MessageRepository;
use crate::utils::truncate_for_log;

pub struct MessageService {
    repository: Arc<MessageRepository>,
    start_time: DateTime<Utc>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::with_repository(Arc::new(MessageRepository::new()))
    }

    /// Create a MessageService over a shared repository.
    pub fn with_repository(repository: Arc<MessageRepository>) -> Self {
        Self {
            repository,
            start_time: Utc::now(),
        }
    }

    pub fn get_root(&self) -> &'static str {
        MSG_ROOT
    }

    /// Store a message, stamping `createdOn` if the client did not.
    pub async fn post_message(&self, mut message: LogMessage) -> LogMessage {
        if message.created_on.is_none() {
            message.created_on = Some(Utc::now());
        }

        info!(
            "[{}] {} {}: {}",
            message.severity,
            message.service,
            message.address,
            truncate_for_log(&message.message)
        );
        self.repository.insert(message.clone()).await;
        message
    }

    /// One page of messages as described by `state`, plus the total count.
    pub async fn get_messages(
        &self,
        state: &PaginationState,
    ) -> Result<(Vec<LogMessage>, u64), ApiError> {
        let field: SortField = state.sort_by().parse()?;
        debug!("Fetching messages: {}", state);

        Ok(self
            .repository
            .find_page(field, state.order(), state.start_index(), state.per_page())
            .await)
    }

    /// Synchronize `raw` with `state` and read the page the corrected query selects.
    ///
    /// The query clause itself is not evaluated; only pagination and the
    /// leading sort clause are applied to the stored messages. When the
    /// document brings its own sort and that clause is not a message field,
    /// messages are ordered by `createdOn` in the requested order.
    pub async fn query_messages(
        &self,
        state: &mut PaginationState,
        raw: &[u8],
    ) -> Result<(Value, Vec<LogMessage>, u64), ApiError> {
        let document = decode_document(raw)?;
        let has_own_sort = !matches!(document.get("sort"), None | Some(Value::Null));
        let corrected = state.synchronize_document(document)?;
        debug!("Synchronized query, pagination now {}", state);

        let (field, order) = match leading_sort_clause(&corrected) {
            Some(clause) => clause,
            None if has_own_sort => (SortField::CreatedOn, state.order()),
            None => (state.sort_by().parse()?, state.order()),
        };

        let (messages, count) = self
            .repository
            .find_page(field, order, state.start_index(), state.per_page())
            .await;

        Ok((Value::Object(corrected), messages, count))
    }

    pub async fn get_stats(&self) -> LoggerStats {
        LoggerStats {
            num_messages: self.repository.count().await,
            start_time: self.start_time,
        }
    }
}

impl Default for MessageService {
    fn default() -> Self {
        Self::new()
    }
}

/// The first `sort` clause, when it names a message field with a usable direction.
///
/// Accepts both `{"field": "asc"}` and `{"field": {"order": "asc"}}`.
fn leading_sort_clause(document: &Map<String, Value>) -> Option<(SortField, SortOrder)> {
    let clause = match document.get("sort")? {
        Value::Array(clauses) => clauses.first()?.as_object()?,
        Value::Object(clause) => clause,
        _ => return None,
    };
    let (name, direction) = clause.iter().next()?;

    let direction = match direction {
        Value::String(direction) => direction.as_str(),
        Value::Object(options) => options.get("order")?.as_str()?,
        _ => return None,
    };

    Some((name.parse().ok()?, direction.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use serde_json::json;

    fn message(service: &str, text: &str) -> LogMessage {
        LogMessage {
            service: service.to_string(),
            address: "10.0.0.1".to_string(),
            time: None,
            created_on: None,
            severity: Severity::Info,
            message: text.to_string(),
        }
    }

    async fn seeded(count: usize) -> MessageService {
        let service = MessageService::new();
        for i in 0..count {
            service
                .post_message(message(&format!("svc-{:02}", i), &format!("msg {}", i)))
                .await;
        }
        service
    }

    #[actix_web::test]
    async fn test_post_message_stamps_created_on() {
        let service = MessageService::new();
        let stored = service.post_message(message("svc", "hello")).await;

        assert!(stored.created_on.is_some());
        assert_eq!(service.get_stats().await.num_messages, 1);
    }

    #[actix_web::test]
    async fn test_get_messages_pages_by_state() {
        let service = seeded(25).await;
        let state = PaginationState::new(2, 10, "service", SortOrder::Ascending).unwrap();

        let (messages, count) = service.get_messages(&state).await.unwrap();

        assert_eq!(count, 25);
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0].service, "svc-20");
    }

    #[actix_web::test]
    async fn test_get_messages_rejects_unknown_sort_field() {
        let service = seeded(1).await;
        let state = PaginationState::new(0, 10, "colour", SortOrder::Ascending).unwrap();

        let result = service.get_messages(&state).await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_query_messages_uses_reconciled_page() {
        let service = seeded(25).await;
        let mut state = PaginationState::new(0, 10, "service", SortOrder::Ascending).unwrap();

        let (query, messages, count) = service
            .query_messages(&mut state, br#"{"size": 4, "from": 9}"#)
            .await
            .unwrap();

        assert_eq!(query["from"], json!(8));
        assert_eq!(state.page(), 2);
        assert_eq!(count, 25);
        let services: Vec<&str> = messages.iter().map(|m| m.service.as_str()).collect();
        assert_eq!(services, vec!["svc-08", "svc-09", "svc-10", "svc-11"]);
    }

    #[actix_web::test]
    async fn test_query_messages_honours_document_sort() {
        let service = seeded(3).await;
        let mut state = PaginationState::new(0, 10, "service", SortOrder::Ascending).unwrap();

        let (_, messages, _) = service
            .query_messages(&mut state, br#"{"sort": [{"service": {"order": "desc"}}]}"#)
            .await
            .unwrap();

        assert_eq!(messages[0].service, "svc-02");
    }

    #[actix_web::test]
    async fn test_query_messages_failure_keeps_state() {
        let service = seeded(3).await;
        let mut state = PaginationState::new(1, 10, "service", SortOrder::Ascending).unwrap();
        let before = state.clone();

        let result = service.query_messages(&mut state, br#"{"size": 0}"#).await;

        assert!(matches!(result, Err(ApiError::ValidationError(_))));
        assert_eq!(state, before);
    }

    #[test]
    fn test_leading_sort_clause_forms() {
        let plain = json!({"sort": [{"severity": "asc"}, {"service": "desc"}]});
        let nested = json!({"sort": [{"createdOn": {"order": "desc"}}]});
        let unknown = json!({"sort": [{"_score": "desc"}]});

        assert_eq!(
            leading_sort_clause(plain.as_object().unwrap()),
            Some((SortField::Severity, SortOrder::Ascending))
        );
        assert_eq!(
            leading_sort_clause(nested.as_object().unwrap()),
            Some((SortField::CreatedOn, SortOrder::Descending))
        );
        assert_eq!(leading_sort_clause(unknown.as_object().unwrap()), None);
    }

    #[actix_web::test]
    async fn test_query_messages_foreign_sort_ignores_state_sort_field() {
        let service = seeded(3).await;
        let mut state = PaginationState::new(0, 10, "colour", SortOrder::Ascending).unwrap();

        let (query, messages, count) = service
            .query_messages(&mut state, br#"{"sort": [{"_score": "desc"}]}"#)
            .await
            .unwrap();

        assert_eq!(query["sort"], json!([{"_score": "desc"}]));
        assert_eq!(count, 3);
        assert_eq!(messages.len(), 3);
    }

    #[actix_web::test]
    async fn test_query_messages_synthesized_sort_still_validated() {
        let service = seeded(1).await;
        let mut state = PaginationState::new(0, 10, "colour", SortOrder::Ascending).unwrap();

        let result = service.query_messages(&mut state, b"{}").await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }
}
