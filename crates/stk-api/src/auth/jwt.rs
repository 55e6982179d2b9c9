use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use stk_store::models::Role;
use uuid::Uuid;

use crate::error::ApiError;

/// Claims carried in the session token.
///
/// `sub` is the session id rather than the user id: a token is only valid as
/// long as its session lives in the store, so logout invalidates it even
/// before `exp`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Session id as a string
    pub sub: String,
    /// User email
    pub email: String,
    /// User role, checked by role-guarded routes without a store lookup
    pub role: Role,
    /// Expiry (unix seconds)
    pub exp: usize,
    /// Issued at (unix seconds)
    pub iat: usize,
}

/// Generate a JWT token for a session
pub fn generate_jwt_token(
    session_id: Uuid,
    email: String,
    role: Role,
    jwt_secret: &str,
    expiry_hours: i64,
) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = Claims {
        sub: session_id.to_string(),
        email,
        role,
        iat: now.timestamp() as usize,
        exp: (now + chrono::Duration::hours(expiry_hours)).timestamp() as usize,
    };

    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verify and decode a JWT token
pub fn verify_jwt_token(token: &str, jwt_secret: &str) -> Result<Claims, ApiError> {
    let token_data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::Auth("Invalid or expired token".to_string()))?;

    Ok(token_data.claims)
}
