use std::sync::Arc;

use crate::assessment::recommendations::FrameworkStore;
use crate::assessment::service::AssessmentService;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Session lifecycle backend. Default: PgAssessmentService.
    pub assessments: Arc<dyn AssessmentService>,
    /// Compliance framework reference data for recommendation fallback.
    pub frameworks: Arc<dyn FrameworkStore>,
}
