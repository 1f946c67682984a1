use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One visitor-authored contact request as it travels the wire. Carries no
/// identifier and no timestamp; both are assigned server-side at acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
}

/// The durable, server-owned row. Inserted by ingestion, deleted by the
/// administrative surface, never updated in place.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct SubmissionRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}
