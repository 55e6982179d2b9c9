use axum::{Json, Router, extract::State, routing::get};
use stk_store::models::Subject;

use super::model::{ProgressResponse, SubjectProgress};
use crate::{ApiState, auth::AuthUser, error::ApiError};

/// Create the subject routes (student dashboard)
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/subjects", get(list_subjects))
        .route("/subjects/progress", get(subject_progress))
}

async fn list_subjects(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<Json<Vec<Subject>>, ApiError> {
    auth_user.require_student()?;

    let session = state
        .sessions
        .get(auth_user.session_id)
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?;

    Ok(Json(session.subjects))
}

async fn subject_progress(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<Json<ProgressResponse>, ApiError> {
    auth_user.require_student()?;

    let session = state
        .sessions
        .get(auth_user.session_id)
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?;

    let total_topics: u32 = session.subjects.iter().map(|s| s.total_topics).sum();
    let completed_topics: u32 = session.subjects.iter().map(|s| s.completed_topics).sum();
    let overall_progress = stk_progress::progress_percentage(completed_topics, total_topics);

    let subjects = session
        .subjects
        .into_iter()
        .map(|subject| {
            let percentage = stk_progress::progress_percentage(
                subject.completed_topics,
                subject.total_topics,
            );
            SubjectProgress {
                subject,
                percentage,
            }
        })
        .collect();

    Ok(Json(ProgressResponse {
        overall_progress,
        total_topics,
        completed_topics,
        subjects,
    }))
}
