use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::IssueStatus;

/// One entry of an issue's append-only status log
#[derive(Debug, Clone, FromRow)]
pub struct IssueUpdate {
    pub id: Uuid,
    pub issue_id: Uuid,
    pub status: IssueStatus,
    pub comment: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}
