//! Staff account management service

use validator::Validate;

use crate::{
    client::ApiClient,
    error::{ClientError, ClientResult},
    models::staff::{CreateStaff, StaffUser, UpdateStaff},
};

#[derive(Clone)]
pub struct StaffService {
    client: ApiClient,
}

impl StaffService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all staff accounts.
    ///
    /// The backend exposes the listing on the auth router rather than under
    /// `/staff`; writes go to `/staff`.
    pub async fn list(&self) -> ClientResult<Vec<StaffUser>> {
        let value = self.client.get_value("/auth/users").await?;
        super::unwrap_list(value, "users")
    }

    /// Register a new staff account
    pub async fn create(&self, staff: &CreateStaff) -> ClientResult<StaffUser> {
        staff
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let value = self.client.post("/staff", staff).await?;
        super::unwrap_one(value, "user")
    }

    /// Update an existing staff account
    pub async fn update(&self, id: i64, staff: &UpdateStaff) -> ClientResult<StaffUser> {
        staff
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let value = self.client.patch(&format!("/staff/{}", id), staff).await?;
        super::unwrap_one(value, "user")
    }

    /// Delete a staff account
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("/staff/{}", id)).await
    }
}
