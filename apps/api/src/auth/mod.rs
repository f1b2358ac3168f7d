//! Bearer-token authentication.
//!
//! [`AuthUser`] is an extractor: any handler taking it rejects requests
//! without a valid HS256 access token signed with `JWT_SECRET`. Permission
//! checks live in [`permissions`] and are invoked explicitly by handlers.

pub mod permissions;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jsonwebtoken::{errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

pub use permissions::{require_permission, Authorized, Permission};

const ACCESS_TOKEN_TYPE: &str = "access";

/// JWT payload carried by access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: u64,
    #[serde(rename = "type")]
    pub token_type: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// The authenticated caller.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub permissions: Vec<String>,
}

impl AuthUser {
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.iter().any(|p| p == permission.as_str())
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        AuthUser {
            id: claims.sub,
            permissions: claims.permissions,
        }
    }
}

/// Decodes and validates an access token.
pub fn decode_access_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let data = jsonwebtoken::decode::<Claims>(token, &key, &Validation::new(Algorithm::HS256))
        .map_err(|e| {
            debug!("Rejected bearer token: {e}");
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("Token has expired. Please log in again.".to_string())
                }
                _ => AppError::Unauthorized("Could not validate credentials".to_string()),
            }
        })?;

    if data.claims.token_type != ACCESS_TOKEN_TYPE {
        return Err(AppError::Unauthorized(
            "Could not validate credentials".to_string(),
        ));
    }

    Ok(data.claims)
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Unauthorized("Not authenticated".to_string()))?;

        let claims = decode_access_token(bearer.token(), &state.config.jwt_secret)?;
        Ok(AuthUser::from(claims))
    }
}

/// Mints an access token. Token issuance belongs to the login service; this
/// exists so handler tests can authenticate.
#[cfg(test)]
pub fn encode_access_token(user_id: Uuid, permissions: &[&str], secret: &str) -> String {
    use jsonwebtoken::{EncodingKey, Header};

    let claims = Claims {
        sub: user_id,
        exp: jsonwebtoken::get_current_timestamp() + 3600,
        token_type: ACCESS_TOKEN_TYPE.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    };
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}
