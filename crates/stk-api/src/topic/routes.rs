use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
};
use chrono::Utc;
use serde_json::json;
use stk_store::models::{NewTopic, Topic};
use uuid::Uuid;

use super::model::{
    SelectYearRequest, SubjectTopicSummary, TopicProgressResponse, TopicWithStatus, TopicsQuery,
    TopicsResponse,
};
use crate::{ApiState, auth::AuthUser, error::ApiError, validation};

/// Create the topic routes (faculty dashboard)
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/topics", get(list_topics).post(create_topic))
        .route("/topics/progress", get(topic_progress))
        .route("/topics/year", put(select_year))
        .route("/topics/{id}/toggle", post(toggle_topic))
}

/// Resolve the effective year filter: an explicit query override wins over
/// the session's stored selection.
fn effective_year(query_year: Option<u8>, selected_year: u8) -> Result<u8, ApiError> {
    match query_year {
        Some(year) => {
            validation::validate_academic_year(year)?;
            Ok(year)
        }
        None => Ok(selected_year),
    }
}

fn with_status(topics: Vec<Topic>) -> Vec<TopicWithStatus> {
    let today = Utc::now().date_naive();

    topics
        .into_iter()
        .map(|topic| {
            let status = stk_progress::topic_status(topic.is_completed, topic.scheduled_date, today);
            TopicWithStatus { topic, status }
        })
        .collect()
}

async fn list_topics(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Query(query): Query<TopicsQuery>,
) -> Result<Json<TopicsResponse>, ApiError> {
    auth_user.require_faculty()?;

    let session = state
        .sessions
        .get(auth_user.session_id)
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?;

    let year = effective_year(query.year, session.selected_year)?;
    let topics = with_status(session.topics_for_year(year));

    Ok(Json(TopicsResponse { year, topics }))
}

async fn create_topic(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Json(payload): Json<NewTopic>,
) -> Result<(StatusCode, Json<Topic>), ApiError> {
    auth_user.require_faculty()?;
    validation::validate_academic_year(payload.year)?;

    let topic = state
        .sessions
        .with(auth_user.session_id, |session| session.add_topic(payload))
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?;

    Ok((StatusCode::CREATED, Json(topic)))
}

async fn toggle_topic(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Topic>, ApiError> {
    auth_user.require_faculty()?;

    let topic = state
        .sessions
        .with(auth_user.session_id, |session| {
            session.toggle_topic(id, Utc::now()).cloned()
        })
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?
        .ok_or_else(|| ApiError::NotFound(format!("Topic not found: {id}")))?;

    Ok(Json(topic))
}

async fn select_year(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Json(payload): Json<SelectYearRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    auth_user.require_faculty()?;
    validation::validate_academic_year(payload.year)?;

    state
        .sessions
        .with(auth_user.session_id, |session| {
            session.select_year(payload.year);
        })
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?;

    Ok(Json(json!({ "year": payload.year })))
}

async fn topic_progress(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Query(query): Query<TopicsQuery>,
) -> Result<Json<TopicProgressResponse>, ApiError> {
    auth_user.require_faculty()?;

    let session = state
        .sessions
        .get(auth_user.session_id)
        .await
        .ok_or_else(|| ApiError::Auth("Session not found".to_string()))?;

    let year = effective_year(query.year, session.selected_year)?;
    let topics = session.topics_for_year(year);

    // Group by subject in first-seen order, the order the chart renders in
    let mut subjects: Vec<SubjectTopicSummary> = Vec::new();
    for topic in &topics {
        let idx = match subjects.iter().position(|s| s.subject == topic.subject) {
            Some(idx) => idx,
            None => {
                subjects.push(SubjectTopicSummary {
                    subject: topic.subject.clone(),
                    total: 0,
                    completed: 0,
                    percentage: 0,
                });
                subjects.len() - 1
            }
        };

        subjects[idx].total += 1;
        if topic.is_completed {
            subjects[idx].completed += 1;
        }
    }

    for summary in &mut subjects {
        summary.percentage = stk_progress::progress_percentage(summary.completed, summary.total);
    }

    Ok(Json(TopicProgressResponse { year, subjects }))
}
