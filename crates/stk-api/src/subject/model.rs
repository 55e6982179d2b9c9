use serde::Serialize;
use stk_store::models::Subject;

/// Subject augmented with its completion percentage
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectProgress {
    #[serde(flatten)]
    pub subject: Subject,
    pub percentage: u32,
}

/// Chart payload for the student progress overview: the pie chart reads the
/// overall figure, the bar chart the per-subject counters
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub overall_progress: u32,
    pub total_topics: u32,
    pub completed_topics: u32,
    pub subjects: Vec<SubjectProgress>,
}
