//! Authentication service: login, logout, cached identity

use serde::{Deserialize, Serialize};

use crate::{
    client::ApiClient,
    error::{ClientError, ClientResult},
    models::staff::StaffUser,
    session::Session,
    validation,
};

#[derive(Debug, Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: StaffUser,
}

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Authenticate and establish a session.
    ///
    /// A malformed email fails fast with `Validation` before any network
    /// call. A rejected credential surfaces as `Auth` without touching any
    /// previously stored session; the client's 401 policy handles that
    /// distinction.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<StaffUser> {
        let email = email.trim();
        if !validation::validate_email(email) {
            return Err(ClientError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(ClientError::Validation("Password is required".to_string()));
        }

        let value = self
            .client
            .post("/auth/login", &LoginPayload { email, password })
            .await?;
        let response: LoginResponse = super::unwrap_one(value, "auth")?;

        self.client.session().set(Session {
            token: response.token,
            user: response.user.clone(),
        });
        tracing::info!(username = %response.user.username, "session established");

        Ok(response.user)
    }

    /// Drop the stored session
    pub fn logout(&self) {
        self.client.session().clear();
        tracing::info!("session cleared");
    }

    /// The cached identity from the current session, if any
    pub fn current_user(&self) -> Option<StaffUser> {
        self.client.session().get().map(|s| s.user)
    }

    /// Whether a session is currently established
    pub fn is_authenticated(&self) -> bool {
        self.client.session().token().is_some()
    }
}
