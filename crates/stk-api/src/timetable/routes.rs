use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use stk_store::seed::{DAYS, TIME_SLOTS};

use super::model::{SlotLookupResponse, TimetableResponse};
use crate::{ApiState, auth::AuthUser, error::ApiError};

/// Create the timetable routes; a pure read view, available to both roles
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/timetable", get(get_timetable))
        .route("/timetable/{day}/{time}", get(lookup_slot))
}

async fn get_timetable(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<Json<TimetableResponse>, ApiError> {
    let session = state
        .sessions
        .get(auth_user.session_id)
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?;

    Ok(Json(TimetableResponse {
        days: DAYS.iter().map(|day| day.to_string()).collect(),
        time_slots: TIME_SLOTS.iter().map(|slot| slot.to_string()).collect(),
        slots: session.timetable,
    }))
}

async fn lookup_slot(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Path((day, time)): Path<(String, String)>,
) -> Result<Json<SlotLookupResponse>, ApiError> {
    let session = state
        .sessions
        .get(auth_user.session_id)
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?;

    let slot = session.lookup_slot(&day, &time).cloned();

    Ok(Json(SlotLookupResponse { day, time, slot }))
}
