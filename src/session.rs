//! Session state: the persisted token and cached staff identity
//!
//! Modeled as an explicitly-injected capability handed to [`ApiClient`]
//! rather than ambient global storage, so the client stays composable and
//! testable. Lifecycle: set on login, cleared on logout or on a confirmed
//! authentication failure.
//!
//! [`ApiClient`]: crate::client::ApiClient

use std::sync::RwLock;

use crate::models::staff::StaffUser;

/// An established session: bearer token plus the staff user it belongs to
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: StaffUser,
}

/// Storage capability for the current session.
///
/// Implementations must tolerate concurrent reads from in-flight requests.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<Session>;
    fn set(&self, session: Session);
    fn clear(&self);

    fn token(&self) -> Option<String> {
        self.get().map(|s| s.token)
    }
}

/// In-memory session store, the default for native embedders and tests
#[derive(Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.inner.read().expect("session lock poisoned").clone()
    }

    fn set(&self, session: Session) {
        *self.inner.write().expect("session lock poisoned") = Some(session);
    }

    fn clear(&self) {
        *self.inner.write().expect("session lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::staff::StaffRole;

    fn session() -> Session {
        Session {
            token: "tok".to_string(),
            user: StaffUser {
                id: 1,
                username: "admin".to_string(),
                email: "admin@library.com".to_string(),
                role: StaffRole::Admin,
            },
        }
    }

    #[test]
    fn set_get_clear_roundtrip() {
        let store = MemorySessionStore::new();
        assert!(store.get().is_none());
        assert!(store.token().is_none());

        store.set(session());
        assert_eq!(store.token().as_deref(), Some("tok"));
        assert_eq!(store.get().unwrap().user.username, "admin");

        store.clear();
        assert!(store.get().is_none());
    }
}
