//! Dashboard statistics models

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::dates;

/// Headline counters shown on the dashboard. The backend sends these in
/// camelCase, unlike the resource endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_books: i64,
    #[serde(default)]
    pub total_members: i64,
    #[serde(default)]
    pub active_borrows: i64,
    #[serde(default)]
    pub overdue_books: i64,
}

/// Recent-activity feed entry; the shape is loose on purpose
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default, deserialize_with = "dates::lenient_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// `GET /dashboard` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(default)]
    pub stats: DashboardStats,
    #[serde(default)]
    pub recent_activities: Vec<Activity>,
}
