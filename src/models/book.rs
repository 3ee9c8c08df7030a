//! Book model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ClientError, ClientResult};

/// Book as returned by the backend.
///
/// `available_copies` is an advisory aggregate owned by the backend: it is
/// decremented on borrow and incremented on return server-side, and must be
/// re-fetched after writes, never inferred locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre_id: Option<i64>,
    #[serde(default)]
    pub genre_name: Option<String>,
    #[serde(default)]
    pub published_year: Option<i32>,
    #[serde(default)]
    pub available_copies: i64,
}

impl Book {
    /// Whether at least one copy is displayed as available
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }
}

/// Create book request
#[derive(Debug, Serialize, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub genre_id: i64,
    pub published_year: i32,
    #[validate(range(min = 0, message = "Available copies cannot be negative"))]
    pub available_copies: i64,
}

impl CreateBook {
    /// Build a create payload from raw form strings, coercing the numeric
    /// fields to the types the backend expects.
    pub fn from_form(
        title: &str,
        author: &str,
        genre_id: &str,
        published_year: &str,
        available_copies: &str,
    ) -> ClientResult<Self> {
        let payload = Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            genre_id: parse_numeric(genre_id, "genre")?,
            published_year: parse_numeric(published_year, "published year")?,
            available_copies: parse_numeric(available_copies, "available copies")?,
        };
        payload
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        Ok(payload)
    }
}

/// Update book request (PUT, partial fields allowed)
#[derive(Debug, Default, Serialize, Validate)]
pub struct UpdateBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, message = "Available copies cannot be negative"))]
    pub available_copies: Option<i64>,
}

fn parse_numeric<T: std::str::FromStr>(raw: &str, field: &str) -> ClientResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| ClientError::Validation(format!("Invalid {}: {:?}", field, raw)))
}
