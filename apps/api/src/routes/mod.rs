pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/v1/assessments", assessment_routes())
        .with_state(state)
}

fn assessment_routes() -> Router<AppState> {
    Router::new()
        .route("/quick", post(handlers::handle_quick_assessment))
        // `/` and `/start` are the same operation; both stay for older clients.
        .route(
            "/",
            get(handlers::handle_list_sessions).post(handlers::handle_start_session),
        )
        .route("/start", post(handlers::handle_start_session))
        .route("/current", get(handlers::handle_current_session))
        .route("/questions/:stage", get(handlers::handle_get_questions))
        .route("/:session_id", get(handlers::handle_get_session))
        .route(
            "/:session_id/response",
            put(handlers::handle_update_response),
        )
        .route(
            "/:session_id/responses",
            post(handlers::handle_update_responses),
        )
        .route(
            "/:session_id/recommendations",
            get(handlers::handle_get_recommendations),
        )
        .route(
            "/:session_id/complete",
            post(handlers::handle_complete_session),
        )
}
