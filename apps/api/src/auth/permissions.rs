use std::fmt;

use tracing::warn;
use uuid::Uuid;

use super::AuthUser;
use crate::errors::AppError;

/// Named permissions checked by the assessment endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    AssessmentCreate,
    AssessmentList,
    AssessmentUpdate,
}

impl Permission {
    pub const fn as_str(self) -> &'static str {
        match self {
            Permission::AssessmentCreate => "assessment_create",
            Permission::AssessmentList => "assessment_list",
            Permission::AssessmentUpdate => "assessment_update",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proof that the caller passed a permission check.
///
/// Only [`require_permission`] constructs this, and every service call takes
/// one, so a handler cannot reach the service without gating first.
#[derive(Debug, Clone, Copy)]
pub struct Authorized {
    user_id: Uuid,
    permission: Permission,
}

impl Authorized {
    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn permission(&self) -> Permission {
        self.permission
    }
}

pub fn require_permission(user: &AuthUser, permission: Permission) -> Result<Authorized, AppError> {
    if user.has_permission(permission) {
        Ok(Authorized {
            user_id: user.id,
            permission,
        })
    } else {
        warn!(user_id = %user.id, %permission, "permission denied");
        Err(AppError::Forbidden(permission.as_str()))
    }
}
