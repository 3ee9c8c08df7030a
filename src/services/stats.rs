//! Dashboard statistics service

use crate::{client::ApiClient, error::ClientResult, models::stats::Dashboard};

#[derive(Clone)]
pub struct StatsService {
    client: ApiClient,
}

impl StatsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Headline counters and the recent-activity feed
    pub async fn dashboard(&self) -> ClientResult<Dashboard> {
        self.client.get("/dashboard").await
    }
}
