use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::assessment::AssessmentSessionRow;

pub const DEFAULT_SESSION_TYPE: &str = "compliance_scoping";

fn default_session_type() -> String {
    DEFAULT_SESSION_TYPE.to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AssessmentSessionCreate {
    #[serde(default = "default_session_type")]
    pub session_type: String,
    pub business_profile_id: Option<Uuid>,
}

/// Body of `PUT /:session_id/response`.
#[derive(Debug, Deserialize)]
pub struct AssessmentResponseUpdate {
    pub question_id: String,
    pub response: Value,
}

/// Body of `POST /:session_id/responses`. Every field is optional; presence
/// of `question_id` is checked by the handler.
#[derive(Debug, Default, Deserialize)]
pub struct LooseResponseUpdate {
    #[serde(default)]
    pub question_id: Option<Value>,
    #[serde(default)]
    pub response: Option<Value>,
}

impl LooseResponseUpdate {
    /// The question id, if present as a non-empty string or a non-zero number.
    /// Zero counts as missing, the same as an empty string.
    pub fn question_id(&self) -> Option<String> {
        match self.question_id.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuickAssessmentRequest {
    pub business_profile_id: String,
    pub assessment_type: String,
    pub industry_standard: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Responses
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSessionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub business_profile_id: Option<Uuid>,
    pub session_type: String,
    pub status: String,
    pub current_stage: i32,
    pub total_stages: i32,
    pub questions_answered: usize,
    pub responses: Value,
    pub recommendations: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<AssessmentSessionRow> for AssessmentSessionResponse {
    fn from(row: AssessmentSessionRow) -> Self {
        let questions_answered = row.responses.as_object().map_or(0, |m| m.len());
        AssessmentSessionResponse {
            id: row.id,
            user_id: row.user_id,
            business_profile_id: row.business_profile_id,
            session_type: row.session_type,
            status: row.status,
            current_stage: row.current_stage,
            total_stages: row.total_stages,
            questions_answered,
            responses: row.responses,
            recommendations: row.recommendations,
            created_at: row.created_at,
            updated_at: row.updated_at,
            completed_at: row.completed_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    YesNo,
    MultipleChoice,
    FreeText,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentQuestion {
    pub id: &'static str,
    pub stage: i32,
    pub text: &'static str,
    pub question_type: QuestionType,
    pub options: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FrameworkInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
}

/// A suggested framework with a priority label and rationale.
///
/// Priority labels are plain strings: the quick rule emits lowercase
/// (`"high"`), the session fallback emits capitalized (`"High"`), and
/// persisted lists are passed through untouched.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FrameworkRecommendation {
    pub framework: FrameworkInfo,
    pub priority: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct QuickAssessmentResponse {
    pub recommendations: Vec<FrameworkRecommendation>,
}

/// Either the list stored on the session or one built from active frameworks.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendationList {
    Persisted(Value),
    Synthesized(Vec<FrameworkRecommendation>),
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: RecommendationList,
}
