// Assessment sessions: compliance self-assessments started, answered and
// completed by a user, plus framework recommendations.
// Handlers gate on a named permission and delegate to AssessmentService.

pub mod handlers;
pub mod models;
pub mod questions;
pub mod quick;
pub mod recommendations;
pub mod service;
