//! Staff account model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::validation;

/// Staff roles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Admin,
    #[default]
    Librarian,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Admin => "admin",
            StaffRole::Librarian => "librarian",
        }
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StaffRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(StaffRole::Admin),
            "librarian" => Ok(StaffRole::Librarian),
            _ => Err(format!("Invalid staff role: {}", s)),
        }
    }
}

/// Staff account as returned by the backend. Passwords are write-only and
/// never appear on reads, so there is no password field here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: StaffRole,
}

/// Create staff request
#[derive(Debug, Serialize, Validate)]
pub struct CreateStaff {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[validate(regex(path = *validation::EMAIL_RE, message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: String,
    pub role: StaffRole,
}

impl CreateStaff {
    pub fn new(username: &str, email: &str, password: &str, role: StaffRole) -> ClientResult<Self> {
        let payload = Self {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
            role,
        };
        payload
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        Ok(payload)
    }
}

/// Update staff request (PATCH). An absent password leaves it unchanged.
#[derive(Debug, Default, Serialize, Validate)]
pub struct UpdateStaff {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *validation::EMAIL_RE, message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<StaffRole>,
}
