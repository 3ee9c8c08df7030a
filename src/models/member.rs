//! Member model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dates;
use crate::error::{ClientError, ClientResult};
use crate::validation;

/// Member status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
            MemberStatus::Suspended => "suspended",
        }
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MemberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(MemberStatus::Active),
            "inactive" => Ok(MemberStatus::Inactive),
            "suspended" => Ok(MemberStatus::Suspended),
            _ => Err(format!("Invalid member status: {}", s)),
        }
    }
}

/// Member as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "dates::lenient_datetime")]
    pub join_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: MemberStatus,
}

// One row with an unexpected status string must not poison a whole list;
// it decodes to the default instead.
fn lenient_status<'de, D>(deserializer: D) -> Result<MemberStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default())
}

/// Create member request. `join_date` is sent on create only.
#[derive(Debug, Serialize, Validate)]
pub struct CreateMember {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(regex(path = *validation::EMAIL_RE, message = "Invalid email format"))]
    pub email: String,
    #[validate(custom(function = "validation::phone_field", message = "Invalid phone number"))]
    pub phone: String,
    pub join_date: DateTime<Utc>,
}

impl CreateMember {
    /// Build a create payload from form input, trimming whitespace and
    /// defaulting the join date to now.
    pub fn from_form(
        name: &str,
        email: &str,
        phone: &str,
        join_date: Option<DateTime<Utc>>,
    ) -> ClientResult<Self> {
        let payload = Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            join_date: join_date.unwrap_or_else(Utc::now),
        };
        payload
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        Ok(payload)
    }
}

/// Update member request (PATCH; join date is immutable after create)
#[derive(Debug, Default, Serialize, Validate)]
pub struct UpdateMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *validation::EMAIL_RE, message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,
}
