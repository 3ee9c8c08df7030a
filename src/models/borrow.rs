//! Borrow record model and the overdue accounting
//!
//! A record with no return date is active; the single state transition sets
//! the return date and is terminal. The overdue predicate and day counter
//! are pure and total: a missing or unparseable due date is never overdue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates;

/// Borrow record as returned by the backend.
///
/// All three dates decode leniently: a malformed value becomes `None`
/// rather than failing the list it arrived in. Denormalized display fields
/// (`book_title`, `member_name`) are optional because not every backend
/// variant sends them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub id: i64,
    #[serde(default)]
    pub book_id: Option<i64>,
    #[serde(default)]
    pub member_id: Option<i64>,
    #[serde(default)]
    pub book_title: Option<String>,
    #[serde(default)]
    pub member_name: Option<String>,
    #[serde(default, deserialize_with = "dates::lenient_datetime")]
    pub borrow_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "dates::lenient_datetime")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "dates::lenient_datetime")]
    pub return_date: Option<DateTime<Utc>>,
}

impl BorrowRecord {
    /// Active means not yet returned
    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }

    /// Overdue at `now`: active and the due date has strictly passed.
    /// A missing due date is never overdue.
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        match (self.return_date, self.due_date) {
            (None, Some(due)) => due < now,
            _ => false,
        }
    }

    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Utc::now())
    }

    /// Whole days past due at `now`; zero whenever the record is not overdue
    pub fn days_overdue_at(&self, now: DateTime<Utc>) -> i64 {
        if !self.is_overdue_at(now) {
            return 0;
        }
        match self.due_date {
            Some(due) => dates::whole_days_since(due, now),
            None => 0,
        }
    }

    pub fn days_overdue(&self) -> i64 {
        self.days_overdue_at(Utc::now())
    }
}

/// Borrow request wire payload: `POST /borrow-records/borrow`
#[derive(Debug, Serialize)]
pub struct BorrowRequest {
    pub book_id: i64,
    pub member_id: i64,
    pub due_date: DateTime<Utc>,
}

/// Return request wire payload: `POST /borrow-records/return`
#[derive(Debug, Serialize)]
pub struct ReturnRequest {
    pub borrow_record_id: i64,
}

/// Row of the overdue report
#[derive(Debug, Clone, Deserialize)]
pub struct OverdueEntry {
    pub id: i64,
    #[serde(default)]
    pub book_title: Option<String>,
    #[serde(default)]
    pub member_name: Option<String>,
    #[serde(default)]
    pub member_email: Option<String>,
    #[serde(default, deserialize_with = "dates::lenient_datetime")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub days_overdue: Option<i64>,
}

/// Row of the popular-genres report
#[derive(Debug, Clone, Deserialize)]
pub struct PopularGenre {
    #[serde(alias = "name")]
    pub genre: String,
    #[serde(alias = "count")]
    pub borrow_count: i64,
}
