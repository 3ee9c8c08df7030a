//! Member management service

use validator::Validate;

use crate::{
    client::ApiClient,
    error::{ClientError, ClientResult},
    models::borrow::BorrowRecord,
    models::member::{CreateMember, Member, UpdateMember},
};

#[derive(Clone)]
pub struct MembersService {
    client: ApiClient,
}

impl MembersService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all members
    pub async fn list(&self) -> ClientResult<Vec<Member>> {
        let value = self.client.get_value("/members").await?;
        super::unwrap_list(value, "members")
    }

    /// Get one member by id
    pub async fn get(&self, id: i64) -> ClientResult<Member> {
        let value = self.client.get_value(&format!("/members/{}", id)).await?;
        super::unwrap_one(value, "member")
    }

    /// Borrowing history for a member.
    ///
    /// A 404 propagates as [`ClientError::NotFound`]; callers typically
    /// render it as an empty history rather than a failure.
    pub async fn borrowing_history(&self, id: i64) -> ClientResult<Vec<BorrowRecord>> {
        let value = self
            .client
            .get_value(&format!("/members/{}/borrowing-history", id))
            .await?;
        super::unwrap_list(value, "records")
    }

    /// Register a new member
    pub async fn create(&self, member: &CreateMember) -> ClientResult<Member> {
        member
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let value = self.client.post("/members", member).await?;
        super::unwrap_one(value, "member")
    }

    /// Update an existing member
    pub async fn update(&self, id: i64, member: &UpdateMember) -> ClientResult<Member> {
        member
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let value = self.client.patch(&format!("/members/{}", id), member).await?;
        super::unwrap_one(value, "member")
    }

    /// Delete a member
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("/members/{}", id)).await
    }
}

/// Case-insensitive search over member name and email.
///
/// An empty term returns the input unfiltered, order preserved.
pub fn filter_members<'a>(members: &'a [Member], term: &str) -> Vec<&'a Member> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return members.iter().collect();
    }
    members
        .iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&needle) || m.email.to_lowercase().contains(&needle)
        })
        .collect()
}
