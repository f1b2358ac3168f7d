//! Assessment session service: the trait seam plus the PostgreSQL implementation.
//!
//! Every method takes an [`Authorized`] value so callers must pass the
//! permission gate first. All queries are scoped to `authorized.user_id()`;
//! a session owned by someone else is indistinguishable from a missing one.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::assessment::models::AssessmentQuestion;
use crate::assessment::questions;
use crate::auth::Authorized;
use crate::errors::AppError;
use crate::models::assessment::{AssessmentSessionRow, STATUS_COMPLETED, STATUS_IN_PROGRESS};

pub const SESSION_NOT_FOUND: &str = "Assessment session not found";

#[async_trait]
pub trait AssessmentService: Send + Sync {
    /// All of the caller's sessions, newest first.
    async fn list_sessions(&self, auth: &Authorized)
        -> Result<Vec<AssessmentSessionRow>, AppError>;

    async fn start_session(
        &self,
        auth: &Authorized,
        session_type: &str,
        business_profile_id: Option<Uuid>,
    ) -> Result<AssessmentSessionRow, AppError>;

    /// The caller's most recent in-progress session.
    async fn current_session(
        &self,
        auth: &Authorized,
    ) -> Result<Option<AssessmentSessionRow>, AppError>;

    async fn get_session(
        &self,
        auth: &Authorized,
        session_id: Uuid,
    ) -> Result<Option<AssessmentSessionRow>, AppError>;

    fn questions_for_stage(&self, auth: &Authorized, stage: i32) -> Vec<AssessmentQuestion>;

    /// Upserts one answer. Last write for a question id wins.
    async fn update_response(
        &self,
        auth: &Authorized,
        session_id: Uuid,
        question_id: &str,
        response: Value,
    ) -> Result<AssessmentSessionRow, AppError>;

    /// Marks the session completed. Already-completed sessions are returned as-is.
    async fn complete_session(
        &self,
        auth: &Authorized,
        session_id: Uuid,
    ) -> Result<AssessmentSessionRow, AppError>;
}

pub fn session_not_found() -> AppError {
    AppError::NotFound(SESSION_NOT_FOUND.to_string())
}

/// Trims and rejects blank session types.
pub fn validate_session_type(session_type: &str) -> Result<&str, AppError> {
    let trimmed = session_type.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "session_type cannot be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Applies an answer to a session in memory.
///
/// Completed sessions are immutable. A non-object `responses` column is
/// reset to an empty map before inserting. Answering a bank question from a
/// later stage advances `current_stage`.
pub fn apply_response(
    session: &mut AssessmentSessionRow,
    question_id: &str,
    response: Value,
) -> Result<(), AppError> {
    if session.is_completed() {
        return Err(AppError::Conflict(format!(
            "Assessment session {} is already completed",
            session.id
        )));
    }

    if !session.responses.is_object() {
        session.responses = Value::Object(Map::new());
    }
    if let Value::Object(map) = &mut session.responses {
        map.insert(question_id.to_string(), response);
    }

    if let Some(stage) = questions::stage_of(question_id) {
        session.current_stage = session.current_stage.max(stage);
    }
    Ok(())
}

pub struct PgAssessmentService {
    pool: PgPool,
}

impl PgAssessmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentService for PgAssessmentService {
    async fn list_sessions(
        &self,
        auth: &Authorized,
    ) -> Result<Vec<AssessmentSessionRow>, AppError> {
        Ok(sqlx::query_as::<_, AssessmentSessionRow>(
            "SELECT * FROM assessment_sessions WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(auth.user_id())
        .fetch_all(&self.pool)
        .await?)
    }

    async fn start_session(
        &self,
        auth: &Authorized,
        session_type: &str,
        business_profile_id: Option<Uuid>,
    ) -> Result<AssessmentSessionRow, AppError> {
        let session_type = validate_session_type(session_type)?;
        let session_id = Uuid::new_v4();

        let session = sqlx::query_as::<_, AssessmentSessionRow>(
            r#"
            INSERT INTO assessment_sessions
                (id, user_id, business_profile_id, session_type, status,
                 current_stage, total_stages, responses)
            VALUES ($1, $2, $3, $4, $5, 1, $6, '{}'::jsonb)
            RETURNING *
            "#,
        )
        .bind(session_id)
        .bind(auth.user_id())
        .bind(business_profile_id)
        .bind(session_type)
        .bind(STATUS_IN_PROGRESS)
        .bind(questions::total_stages())
        .fetch_one(&self.pool)
        .await?;

        info!(
            user_id = %auth.user_id(),
            permission = %auth.permission(),
            "Started assessment session {session_id} ({session_type})"
        );
        Ok(session)
    }

    async fn current_session(
        &self,
        auth: &Authorized,
    ) -> Result<Option<AssessmentSessionRow>, AppError> {
        Ok(sqlx::query_as::<_, AssessmentSessionRow>(
            r#"
            SELECT * FROM assessment_sessions
            WHERE user_id = $1 AND status = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(auth.user_id())
        .bind(STATUS_IN_PROGRESS)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn get_session(
        &self,
        auth: &Authorized,
        session_id: Uuid,
    ) -> Result<Option<AssessmentSessionRow>, AppError> {
        Ok(sqlx::query_as::<_, AssessmentSessionRow>(
            "SELECT * FROM assessment_sessions WHERE id = $1 AND user_id = $2",
        )
        .bind(session_id)
        .bind(auth.user_id())
        .fetch_optional(&self.pool)
        .await?)
    }

    fn questions_for_stage(&self, _auth: &Authorized, stage: i32) -> Vec<AssessmentQuestion> {
        questions::questions_for_stage(stage)
    }

    async fn update_response(
        &self,
        auth: &Authorized,
        session_id: Uuid,
        question_id: &str,
        response: Value,
    ) -> Result<AssessmentSessionRow, AppError> {
        let mut tx = self.pool.begin().await?;

        let mut session = sqlx::query_as::<_, AssessmentSessionRow>(
            "SELECT * FROM assessment_sessions WHERE id = $1 AND user_id = $2 FOR UPDATE",
        )
        .bind(session_id)
        .bind(auth.user_id())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(session_not_found)?;

        apply_response(&mut session, question_id, response)?;

        let updated = sqlx::query_as::<_, AssessmentSessionRow>(
            r#"
            UPDATE assessment_sessions
            SET responses = $1, current_stage = $2, updated_at = now()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&session.responses)
        .bind(session.current_stage)
        .bind(session_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            user_id = %auth.user_id(),
            "Recorded response to {question_id} on assessment session {session_id}"
        );
        Ok(updated)
    }

    async fn complete_session(
        &self,
        auth: &Authorized,
        session_id: Uuid,
    ) -> Result<AssessmentSessionRow, AppError> {
        let completed = sqlx::query_as::<_, AssessmentSessionRow>(
            r#"
            UPDATE assessment_sessions
            SET status = $3, completed_at = now(), updated_at = now()
            WHERE id = $1 AND user_id = $2 AND status <> $3
            RETURNING *
            "#,
        )
        .bind(session_id)
        .bind(auth.user_id())
        .bind(STATUS_COMPLETED)
        .fetch_optional(&self.pool)
        .await?;

        match completed {
            Some(session) => {
                info!(user_id = %auth.user_id(), "Completed assessment session {session_id}");
                Ok(session)
            }
            // Either missing, foreign, or already completed.
            None => self
                .get_session(auth, session_id)
                .await?
                .ok_or_else(session_not_found),
        }
    }
}
