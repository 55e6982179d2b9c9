use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use stk_store::models::Role;
use uuid::Uuid;

use super::cookies::AUTH_COOKIE;
use super::jwt::verify_jwt_token;
use crate::{error::ApiError, state::AuthConfig};

/// Authenticated session extractor
///
/// Use this in route handlers to ensure the caller is logged in. It validates
/// the JWT from the private cookie jar and exposes the session id and role;
/// handlers still have to look the session up in the store, which is what
/// makes logout take effect immediately.
///
/// # Example
/// ```
/// use axum::extract::State;
/// use stk_api::{ApiState, auth::AuthUser, error::ApiError};
///
/// async fn protected_route(
///     auth_user: AuthUser,
///     State(state): State<ApiState>,
/// ) -> Result<(), ApiError> {
///     // auth_user.session_id, auth_user.email and auth_user.role are available
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub session_id: Uuid,
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    /// Reject non-faculty callers of faculty-only routes.
    pub fn require_faculty(&self) -> Result<(), ApiError> {
        if self.role != Role::Faculty {
            return Err(ApiError::Forbidden(
                "This action is only available to faculty accounts".to_string(),
            ));
        }

        Ok(())
    }

    /// Reject non-student callers of student-only routes.
    pub fn require_student(&self) -> Result<(), ApiError> {
        if self.role != Role::Student {
            return Err(ApiError::Forbidden(
                "This action is only available to student accounts".to_string(),
            ));
        }

        Ok(())
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    AuthConfig: FromRef<S>,
    Key: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the auth config
        let auth_config = AuthConfig::from_ref(state);

        // Extract the cookie jar
        let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Auth("Failed to read cookies".to_string()))?;

        // Get the auth token from cookie
        let token = jar
            .get(AUTH_COOKIE)
            .ok_or(ApiError::Auth("Not authenticated".to_string()))?
            .value()
            .to_owned();

        // Verify the token
        let claims = verify_jwt_token(&token, &auth_config.jwt_secret)?;

        // Parse the session id from claims
        let session_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Auth("Invalid session ID in token".to_string()))?;

        Ok(AuthUser {
            session_id,
            email: claims.email,
            role: claims.role,
        })
    }
}
