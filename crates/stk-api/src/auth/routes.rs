use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Cookie};
use stk_store::Session;
use stk_store::models::{Role, User};
use uuid::Uuid;

use super::cookies::{AUTH_COOKIE, create_auth_cookie};
use super::jwt::generate_jwt_token;
use super::middleware::AuthUser;
use super::models::{LoginRequest, NavigateRequest, NavigateResponse, SessionResponse};
use crate::{ApiState, error::ApiError, validation};

/// Placeholder names used when the login form's name field is left blank.
/// Mock-data behavior carried over from the original form, not validation.
const STUDENT_PLACEHOLDER: &str = "John Doe";
const FACULTY_PLACEHOLDER: &str = "Dr. Smith";

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(auth_me))
        .route("/auth/navigate", post(navigate))
}

async fn login(
    State(state): State<ApiState>,
    jar: PrivateCookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(PrivateCookieJar, Json<SessionResponse>), ApiError> {
    validation::validate_email(&payload.email)?;

    let year = match payload.role {
        Role::Student => {
            let year = payload.year.unwrap_or(1);
            validation::validate_academic_year(year)?;
            Some(year)
        }
        Role::Faculty => None,
    };

    // The original form fakes a slow sign-in round-trip. The delay lives
    // inside the request future, so a client that gives up and disconnects
    // cancels it and no session is created.
    if !state.login_delay.is_zero() {
        tokio::time::sleep(state.login_delay).await;
    }

    // No credential verification: any password signs in (mock auth)
    let name = match payload.name.trim() {
        "" => match payload.role {
            Role::Student => STUDENT_PLACEHOLDER.to_string(),
            Role::Faculty => FACULTY_PLACEHOLDER.to_string(),
        },
        name => name.to_string(),
    };

    let user = User {
        id: Uuid::new_v4(),
        name,
        role: payload.role,
        email: payload.email,
        year,
    };

    let session = Session::new(user.clone());
    let page = session.page;
    let session_id = state.sessions.insert(session).await;

    tracing::info!(role = ?user.role, session_id = %session_id, "user logged in");

    let token = generate_jwt_token(
        session_id,
        user.email.clone(),
        user.role,
        &state.jwt_secret,
        state.jwt_expiry_hours,
    )?;
    let cookie = create_auth_cookie(token, &state.environment, state.jwt_expiry_hours);

    Ok((jar.add(cookie), Json(SessionResponse { user, page })))
}

async fn logout(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    jar: PrivateCookieJar,
) -> Result<(PrivateCookieJar, StatusCode), ApiError> {
    state.sessions.remove(auth_user.session_id).await;

    tracing::info!(session_id = %auth_user.session_id, "user logged out");

    let jar = jar.remove(Cookie::from(AUTH_COOKIE));
    Ok((jar, StatusCode::NO_CONTENT))
}

async fn auth_me(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state
        .sessions
        .get(auth_user.session_id)
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?;

    Ok(Json(SessionResponse {
        user: session.user,
        page: session.page,
    }))
}

async fn navigate(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Json(payload): Json<NavigateRequest>,
) -> Result<Json<NavigateResponse>, ApiError> {
    let moved = state
        .sessions
        .with(auth_user.session_id, |session| session.navigate(payload.page))
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?;

    if !moved {
        return Err(ApiError::Forbidden(
            "The requested page is not available for this role".to_string(),
        ));
    }

    Ok(Json(NavigateResponse { page: payload.page }))
}
