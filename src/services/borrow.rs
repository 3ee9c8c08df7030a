//! Borrow/return lifecycle service
//!
//! The one piece of domain logic with real invariants. Preconditions are
//! checked client-side before any network I/O; the backend stays the
//! authority and may still reject a request that raced (for example when
//! the last copy was borrowed concurrently). Copy counts are never mutated
//! here: callers re-fetch after a successful write.

use chrono::{DateTime, Duration, Utc};

use crate::{
    client::ApiClient,
    config::BorrowConfig,
    error::{ClientError, ClientResult},
    models::book::Book,
    models::borrow::{BorrowRecord, BorrowRequest, OverdueEntry, PopularGenre, ReturnRequest},
    models::member::Member,
};

#[derive(Clone)]
pub struct BorrowService {
    client: ApiClient,
    config: BorrowConfig,
}

impl BorrowService {
    pub fn new(client: ApiClient, config: BorrowConfig) -> Self {
        Self { client, config }
    }

    /// Borrow a book for a member.
    ///
    /// The caller passes the `Book` and `Member` it resolved from fetched
    /// lists; holding a `Member` value is what establishes existence. Fails
    /// fast with `Validation` when the displayed copy count is zero or the
    /// chosen due date is not in the future. When no due date is given it
    /// defaults to the configured loan duration from now.
    pub async fn borrow(
        &self,
        book: &Book,
        member: &Member,
        due_date: Option<DateTime<Utc>>,
    ) -> ClientResult<BorrowRecord> {
        let request = build_borrow_request(
            book,
            member,
            due_date,
            Utc::now(),
            self.config.duration_days,
        )?;
        tracing::debug!(book_id = request.book_id, member_id = request.member_id, "borrowing");
        let value = self.client.post("/borrow-records/borrow", &request).await?;
        super::unwrap_one(value, "record")
    }

    /// Return a borrowed book.
    ///
    /// Active → Returned is the only transition and it is terminal: a record
    /// whose return date is already set is rejected here with `Validation`
    /// instead of being sent to the backend.
    pub async fn return_book(&self, record: &BorrowRecord) -> ClientResult<BorrowRecord> {
        if !record.is_active() {
            return Err(ClientError::Validation(format!(
                "Borrow record {} has already been returned",
                record.id
            )));
        }
        let request = ReturnRequest {
            borrow_record_id: record.id,
        };
        let value = self.client.post("/borrow-records/return", &request).await?;
        super::unwrap_one(value, "record")
    }

    /// List all borrow records
    pub async fn list(&self) -> ClientResult<Vec<BorrowRecord>> {
        let value = self.client.get_value("/borrow-records").await?;
        super::unwrap_list(value, "records")
    }

    /// Overdue report
    pub async fn overdue_report(&self) -> ClientResult<Vec<OverdueEntry>> {
        let value = self
            .client
            .get_value("/borrow-records/reports/overdue")
            .await?;
        super::unwrap_list(value, "records")
    }

    /// Popular genres report
    pub async fn popular_genres(&self) -> ClientResult<Vec<PopularGenre>> {
        let value = self
            .client
            .get_value("/borrow-records/reports/popular-genres")
            .await?;
        super::unwrap_list(value, "genres")
    }
}

/// Filter down to active records, order preserved
pub fn active_records(records: &[BorrowRecord]) -> Vec<&BorrowRecord> {
    records.iter().filter(|r| r.is_active()).collect()
}

/// Validate the borrow preconditions and build the wire payload.
///
/// Pure so the rules are testable with a pinned clock.
fn build_borrow_request(
    book: &Book,
    member: &Member,
    due_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    default_duration_days: i64,
) -> ClientResult<BorrowRequest> {
    if !book.is_available() {
        return Err(ClientError::Validation(format!(
            "No copies of \"{}\" are available for borrowing",
            book.title
        )));
    }

    let due_date = match due_date {
        Some(due) if due <= now => {
            return Err(ClientError::Validation(
                "Due date must be in the future".to_string(),
            ));
        }
        Some(due) => due,
        None => now + Duration::days(default_duration_days),
    };

    Ok(BorrowRequest {
        book_id: book.id,
        member_id: member.id,
        due_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::dates::BORROW_DURATION_DAYS;
    use crate::models::member::MemberStatus;
    use crate::session::MemorySessionStore;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn book(copies: i64) -> Book {
        Book {
            id: 10,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre_id: Some(3),
            genre_name: None,
            published_year: Some(1965),
            available_copies: copies,
        }
    }

    fn member() -> Member {
        Member {
            id: 20,
            name: "Jane Smith".to_string(),
            email: "jane@x.com".to_string(),
            phone: None,
            join_date: None,
            status: MemberStatus::Active,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    fn service() -> BorrowService {
        // Unroutable base URL: if a precondition failure ever leaked into a
        // network attempt the test would see Request, not Validation.
        let config = ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
        };
        let client = ApiClient::new(&config, Arc::new(MemorySessionStore::new())).unwrap();
        BorrowService::new(client, BorrowConfig::default())
    }

    #[test]
    fn zero_copies_is_a_validation_error() {
        let err = build_borrow_request(&book(0), &member(), None, now(), BORROW_DURATION_DAYS)
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn past_due_date_is_a_validation_error() {
        let due = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        let err = build_borrow_request(&book(2), &member(), Some(due), now(), BORROW_DURATION_DAYS)
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn due_date_defaults_to_configured_duration() {
        let request =
            build_borrow_request(&book(2), &member(), None, now(), BORROW_DURATION_DAYS).unwrap();
        assert_eq!(request.book_id, 10);
        assert_eq!(request.member_id, 20);
        assert_eq!((request.due_date - now()).num_days(), BORROW_DURATION_DAYS);
    }

    #[test]
    fn explicit_future_due_date_is_kept() {
        let due = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let request =
            build_borrow_request(&book(1), &member(), Some(due), now(), BORROW_DURATION_DAYS)
                .unwrap();
        assert_eq!(request.due_date, due);
    }

    #[test]
    fn borrow_with_zero_copies_issues_no_request() {
        let err = tokio_test::block_on(service().borrow(&book(0), &member(), None)).unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn returning_a_returned_record_issues_no_request() {
        let record: BorrowRecord = serde_json::from_value(serde_json::json!({
            "id": 7, "book_id": 10, "member_id": 20,
            "due_date": "2024-01-10T00:00:00Z",
            "return_date": "2024-01-12T00:00:00Z"
        }))
        .unwrap();
        let err = service().return_book(&record).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[test]
    fn active_filter_preserves_order() {
        let records: Vec<BorrowRecord> = serde_json::from_value(serde_json::json!([
            {"id": 1, "return_date": "2024-01-12T00:00:00Z"},
            {"id": 2},
            {"id": 3}
        ]))
        .unwrap();
        let active = active_records(&records);
        assert_eq!(active.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3]);
    }
}
