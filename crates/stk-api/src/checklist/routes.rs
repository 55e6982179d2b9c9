use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use chrono::Utc;
use uuid::Uuid;

use super::model::{AddItemRequest, ChecklistResponse};
use crate::{ApiState, auth::AuthUser, error::ApiError};

/// Create the checklist routes; available to both roles, each session sees
/// only its own list
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/checklist", get(get_checklist).post(add_item))
        .route("/checklist/{id}/toggle", post(toggle_item))
}

async fn get_checklist(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<Json<ChecklistResponse>, ApiError> {
    let session = state
        .sessions
        .get(auth_user.session_id)
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?;

    Ok(Json(ChecklistResponse::from_items(session.checklist)))
}

async fn add_item(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Json(payload): Json<AddItemRequest>,
) -> Result<Json<ChecklistResponse>, ApiError> {
    // Whitespace-only text is a silent no-op: the unchanged list comes back
    // with no error signal, exactly like the original form
    let items = state
        .sessions
        .with(auth_user.session_id, |session| {
            session.add_checklist_item(&payload.text);
            session.checklist.clone()
        })
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?;

    Ok(Json(ChecklistResponse::from_items(items)))
}

async fn toggle_item(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChecklistResponse>, ApiError> {
    let items = state
        .sessions
        .with(auth_user.session_id, |session| {
            let toggled = session.toggle_checklist_item(id, Utc::now()).is_some();
            toggled.then(|| session.checklist.clone())
        })
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?
        .ok_or_else(|| ApiError::NotFound(format!("Checklist item not found: {id}")))?;

    Ok(Json(ChecklistResponse::from_items(items)))
}
