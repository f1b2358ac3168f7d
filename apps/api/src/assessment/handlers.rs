//! Axum route handlers for the Assessments API.
//!
//! Each handler gates on a named permission first, then makes one service call.

use axum::{extract::State, http::StatusCode};
use tracing::debug;
use uuid::Uuid;

use crate::assessment::models::{
    AssessmentQuestion, AssessmentResponseUpdate, AssessmentSessionCreate,
    AssessmentSessionResponse, LooseResponseUpdate, QuickAssessmentRequest,
    QuickAssessmentResponse, RecommendationList, RecommendationsResponse,
};
use crate::assessment::quick::quick_recommendations;
use crate::assessment::recommendations::{persisted_recommendations, synthesize_recommendations};
use crate::assessment::service::session_not_found;
use crate::auth::{require_permission, AuthUser, Permission};
use crate::errors::AppError;
use crate::extract::{Json, Path};
use crate::state::AppState;

/// POST /api/v1/assessments/quick
pub async fn handle_quick_assessment(
    user: AuthUser,
    Json(request): Json<QuickAssessmentRequest>,
) -> Result<Json<QuickAssessmentResponse>, AppError> {
    require_permission(&user, Permission::AssessmentCreate)?;

    debug!(
        business_profile_id = %request.business_profile_id,
        assessment_type = %request.assessment_type,
        industry_standard = request.industry_standard,
        "Quick assessment requested"
    );

    Ok(Json(QuickAssessmentResponse {
        recommendations: quick_recommendations(request.industry_standard),
    }))
}

/// GET /api/v1/assessments
pub async fn handle_list_sessions(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<AssessmentSessionResponse>>, AppError> {
    let auth = require_permission(&user, Permission::AssessmentList)?;
    let sessions = state.assessments.list_sessions(&auth).await?;
    Ok(Json(sessions.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/assessments and POST /api/v1/assessments/start
pub async fn handle_start_session(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<AssessmentSessionCreate>,
) -> Result<(StatusCode, Json<AssessmentSessionResponse>), AppError> {
    let auth = require_permission(&user, Permission::AssessmentCreate)?;
    let session = state
        .assessments
        .start_session(&auth, &request.session_type, request.business_profile_id)
        .await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

/// GET /api/v1/assessments/current
pub async fn handle_current_session(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<AssessmentSessionResponse>, AppError> {
    let auth = require_permission(&user, Permission::AssessmentList)?;
    let session = state
        .assessments
        .current_session(&auth)
        .await?
        .ok_or_else(|| AppError::NotFound("No active assessment session".to_string()))?;
    Ok(Json(session.into()))
}

/// GET /api/v1/assessments/questions/:stage
pub async fn handle_get_questions(
    State(state): State<AppState>,
    user: AuthUser,
    Path(stage): Path<i32>,
) -> Result<Json<Vec<AssessmentQuestion>>, AppError> {
    let auth = require_permission(&user, Permission::AssessmentList)?;
    Ok(Json(state.assessments.questions_for_stage(&auth, stage)))
}

/// PUT /api/v1/assessments/:session_id/response
pub async fn handle_update_response(
    State(state): State<AppState>,
    user: AuthUser,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AssessmentResponseUpdate>,
) -> Result<Json<AssessmentSessionResponse>, AppError> {
    let auth = require_permission(&user, Permission::AssessmentUpdate)?;
    let session = state
        .assessments
        .update_response(&auth, session_id, &request.question_id, request.response)
        .await?;
    Ok(Json(session.into()))
}

/// POST /api/v1/assessments/:session_id/responses
///
/// Loosely typed variant of the above. A missing `question_id` is a 400 and
/// nothing is written; a missing `response` is stored as null.
pub async fn handle_update_responses(
    State(state): State<AppState>,
    user: AuthUser,
    Path(session_id): Path<Uuid>,
    Json(request): Json<LooseResponseUpdate>,
) -> Result<Json<AssessmentSessionResponse>, AppError> {
    let auth = require_permission(&user, Permission::AssessmentUpdate)?;

    let question_id = request
        .question_id()
        .ok_or_else(|| AppError::Validation("question_id is required".to_string()))?;
    let response = request.response.unwrap_or_default();

    let session = state
        .assessments
        .update_response(&auth, session_id, &question_id, response)
        .await?;
    Ok(Json(session.into()))
}

/// GET /api/v1/assessments/:session_id
pub async fn handle_get_session(
    State(state): State<AppState>,
    user: AuthUser,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AssessmentSessionResponse>, AppError> {
    let auth = require_permission(&user, Permission::AssessmentList)?;
    let session = state
        .assessments
        .get_session(&auth, session_id)
        .await?
        .ok_or_else(session_not_found)?;
    Ok(Json(session.into()))
}

/// GET /api/v1/assessments/:session_id/recommendations
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    user: AuthUser,
    Path(session_id): Path<Uuid>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let auth = require_permission(&user, Permission::AssessmentList)?;
    let session = state
        .assessments
        .get_session(&auth, session_id)
        .await?
        .ok_or_else(session_not_found)?;

    let recommendations = match persisted_recommendations(session.recommendations.as_ref()) {
        Some(stored) => RecommendationList::Persisted(stored),
        None => {
            let frameworks = state.frameworks.active_frameworks().await?;
            RecommendationList::Synthesized(synthesize_recommendations(&frameworks))
        }
    };

    Ok(Json(RecommendationsResponse { recommendations }))
}

/// POST /api/v1/assessments/:session_id/complete
pub async fn handle_complete_session(
    State(state): State<AppState>,
    user: AuthUser,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AssessmentSessionResponse>, AppError> {
    let auth = require_permission(&user, Permission::AssessmentUpdate)?;
    let session = state.assessments.complete_session(&auth, session_id).await?;
    Ok(Json(session.into()))
}
