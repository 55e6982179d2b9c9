use axum::{Json, Router, extract::State, routing::get};

use super::model::NotificationsResponse;
use crate::{ApiState, auth::AuthUser, error::ApiError};

/// Create the notification routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/notifications", get(list_notifications))
}

async fn list_notifications(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<Json<NotificationsResponse>, ApiError> {
    let session = state
        .sessions
        .get(auth_user.session_id)
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?;

    let unread_count = stk_progress::unread_count(session.notifications.iter().map(|n| n.read));

    Ok(Json(NotificationsResponse {
        notifications: session.notifications,
        unread_count,
    }))
}
