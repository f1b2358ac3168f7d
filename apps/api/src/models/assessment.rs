use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentSessionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub business_profile_id: Option<Uuid>,
    pub session_type: String,
    pub status: String,
    pub current_stage: i32,
    pub total_stages: i32,
    /// Question id → answer. Always a JSON object.
    pub responses: Value,
    pub recommendations: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl AssessmentSessionRow {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}
