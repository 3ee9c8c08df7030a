//! Resource services: typed wrappers over the REST resources
//!
//! The backend's envelope shape is unstable: a list endpoint may answer with
//! a bare array or wrap it under `data`, the resource's own key, `items` or
//! `records`. The helpers here normalize every known shape to one canonical
//! type at the service boundary, so the ambiguity never leaks upward.

pub mod auth;
pub mod books;
pub mod borrow;
pub mod genres;
pub mod members;
pub mod staff;
pub mod stats;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub books: books::BooksService,
    pub members: members::MembersService,
    pub genres: genres::GenresService,
    pub staff: staff::StaffService,
    pub borrow: borrow::BorrowService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over one shared client
    pub fn new(client: ApiClient, config: &ClientConfig) -> Self {
        Self {
            auth: auth::AuthService::new(client.clone()),
            books: books::BooksService::new(client.clone()),
            members: members::MembersService::new(client.clone()),
            genres: genres::GenresService::new(client.clone()),
            staff: staff::StaffService::new(client.clone()),
            borrow: borrow::BorrowService::new(client.clone(), config.borrow.clone()),
            stats: stats::StatsService::new(client),
        }
    }
}

/// Wrapper keys tried for every list response, in order
const COMMON_LIST_KEYS: [&str; 3] = ["data", "items", "records"];

/// Normalize a list response: bare array, `{data: [...]}`, the resource's
/// own key, or one of the common wrapper keys.
pub(crate) fn unwrap_list<T: DeserializeOwned>(
    value: Value,
    resource_key: &str,
) -> ClientResult<Vec<T>> {
    let array = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let mut found = None;
            for key in std::iter::once(resource_key).chain(COMMON_LIST_KEYS) {
                if let Some(Value::Array(items)) = map.remove(key) {
                    found = Some(items);
                    break;
                }
            }
            found.ok_or_else(|| {
                ClientError::Decode(format!("No list found under known keys for {}", resource_key))
            })?
        }
        other => {
            return Err(ClientError::Decode(format!(
                "Expected a list of {}, got {}",
                resource_key, other
            )))
        }
    };

    array
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ClientError::from))
        .collect()
}

/// Normalize a single-object response: bare object or wrapped under `data`
/// or the resource's own key.
pub(crate) fn unwrap_one<T: DeserializeOwned>(value: Value, resource_key: &str) -> ClientResult<T> {
    let value = match value {
        Value::Object(mut map) => {
            let wrapped = map
                .remove("data")
                .or_else(|| map.remove(resource_key))
                .filter(Value::is_object);
            match wrapped {
                Some(inner) => inner,
                None => Value::Object(map),
            }
        }
        other => other,
    };
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Genre;
    use serde_json::json;

    #[test]
    fn bare_array_unwraps() {
        let list: Vec<Genre> =
            unwrap_list(json!([{"id": 1, "name": "Fantasy"}]), "genres").unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn data_wrapper_unwraps() {
        let list: Vec<Genre> =
            unwrap_list(json!({"data": [{"id": 1, "name": "Fantasy"}]}), "genres").unwrap();
        assert_eq!(list[0].name, "Fantasy");
    }

    #[test]
    fn resource_key_wrapper_unwraps() {
        let list: Vec<Genre> =
            unwrap_list(json!({"genres": [{"id": 1, "name": "Fantasy"}]}), "genres").unwrap();
        assert_eq!(list[0].id, 1);
    }

    #[test]
    fn records_wrapper_unwraps() {
        let list: Vec<Genre> =
            unwrap_list(json!({"records": [{"id": 2, "name": "Sci-Fi"}]}), "genres").unwrap();
        assert_eq!(list[0].name, "Sci-Fi");
    }

    #[test]
    fn unknown_envelope_is_a_decode_error() {
        let err = unwrap_list::<Genre>(json!({"payload": []}), "genres").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));

        let err = unwrap_list::<Genre>(json!("nope"), "genres").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn single_objects_unwrap_bare_or_wrapped() {
        let bare: Genre = unwrap_one(json!({"id": 1, "name": "Fantasy"}), "genre").unwrap();
        let wrapped: Genre =
            unwrap_one(json!({"data": {"id": 1, "name": "Fantasy"}}), "genre").unwrap();
        assert_eq!(bare.id, wrapped.id);
    }
}
