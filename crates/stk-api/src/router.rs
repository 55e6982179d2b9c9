use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::{auth, checklist, notification, state::ApiState, subject, timetable, topic};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .merge(auth::routes())
        .merge(topic::routes())
        .merge(subject::routes())
        .merge(checklist::routes())
        .merge(timetable::routes())
        .merge(notification::routes())
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
