//! Genre model and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ClientError, ClientResult};

/// Genre as returned by the backend. `book_count` is derived server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub book_count: Option<i64>,
}

/// Create genre request
#[derive(Debug, Serialize, Validate)]
pub struct CreateGenre {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

impl CreateGenre {
    pub fn new(name: &str) -> ClientResult<Self> {
        let payload = Self {
            name: name.trim().to_string(),
        };
        payload
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        Ok(payload)
    }
}

/// Update genre request (PATCH)
#[derive(Debug, Default, Serialize, Validate)]
pub struct UpdateGenre {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(
            CreateGenre::new("   ").unwrap_err(),
            ClientError::Validation(_)
        ));
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(CreateGenre::new(" Fantasy ").unwrap().name, "Fantasy");
    }
}
