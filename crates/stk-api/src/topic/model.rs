use serde::{Deserialize, Serialize};
use stk_progress::TopicStatus;
use stk_store::models::Topic;

/// Topic augmented with its schedule classification.
///
/// The status is computed against today's date on every request and never
/// stored, so a stale `upcoming` can become `overdue` without any mutation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicWithStatus {
    #[serde(flatten)]
    pub topic: Topic,
    pub status: TopicStatus,
}

/// Year-filtered topic listing for the faculty timeline
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicsResponse {
    /// The year the listing was filtered by
    pub year: u8,
    pub topics: Vec<TopicWithStatus>,
}

/// Optional year override for topic listings; the stored filter is used when
/// absent
#[derive(Debug, Deserialize)]
pub struct TopicsQuery {
    pub year: Option<u8>,
}

/// Year filter selection
#[derive(Debug, Deserialize)]
pub struct SelectYearRequest {
    pub year: u8,
}

/// Per-subject completion counters over the filtered topics; feeds the
/// faculty progress chart
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectTopicSummary {
    pub subject: String,
    pub total: u32,
    pub completed: u32,
    pub percentage: u32,
}

/// Chart payload for the faculty topic progress overview
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicProgressResponse {
    pub year: u8,
    pub subjects: Vec<SubjectTopicSummary>,
}
