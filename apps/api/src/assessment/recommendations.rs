//! Session recommendations: the persisted list when present, otherwise one
//! synthesized from the active compliance frameworks.
//!
//! Synthesis is a literal name filter: names containing "GDPR" become High,
//! names containing "ISO" become Medium, everything else is dropped.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::assessment::models::{FrameworkInfo, FrameworkRecommendation};
use crate::errors::AppError;
use crate::models::framework::ComplianceFrameworkRow;

pub const FALLBACK_DESCRIPTION: &str = "Recommended based on your business profile";

/// Read-only access to compliance framework reference data.
#[async_trait]
pub trait FrameworkStore: Send + Sync {
    async fn active_frameworks(&self) -> Result<Vec<ComplianceFrameworkRow>, AppError>;
}

pub struct PgFrameworkStore {
    pool: PgPool,
}

impl PgFrameworkStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FrameworkStore for PgFrameworkStore {
    async fn active_frameworks(&self) -> Result<Vec<ComplianceFrameworkRow>, AppError> {
        Ok(sqlx::query_as::<_, ComplianceFrameworkRow>(
            "SELECT * FROM compliance_frameworks WHERE is_active = TRUE ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?)
    }
}

/// Returns the stored list unless it is null or empty.
pub fn persisted_recommendations(stored: Option<&Value>) -> Option<Value> {
    match stored? {
        Value::Null => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        other => Some(other.clone()),
    }
}

fn fallback_priority(name: &str) -> Option<&'static str> {
    if name.contains("GDPR") {
        Some("High")
    } else if name.contains("ISO") {
        Some("Medium")
    } else {
        None
    }
}

pub fn synthesize_recommendations(
    frameworks: &[ComplianceFrameworkRow],
) -> Vec<FrameworkRecommendation> {
    frameworks
        .iter()
        .filter_map(|fw| {
            let priority = fallback_priority(&fw.name)?;
            Some(FrameworkRecommendation {
                framework: FrameworkInfo {
                    id: Some(fw.id),
                    name: fw.name.clone(),
                    description: fw.description.clone(),
                },
                priority: priority.to_string(),
                description: FALLBACK_DESCRIPTION.to_string(),
            })
        })
        .collect()
}
