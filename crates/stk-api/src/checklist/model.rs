use serde::{Deserialize, Serialize};
use stk_store::models::ChecklistItem;

/// New checklist entry; whitespace-only text is silently ignored
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub text: String,
}

/// The checklist with its derived progress, as rendered above the items
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistResponse {
    pub items: Vec<ChecklistItem>,
    pub completed_count: usize,
    /// Completion percentage; 0 for an empty list
    pub progress: u32,
}

impl ChecklistResponse {
    /// Derive the counters from an item snapshot.
    pub fn from_items(items: Vec<ChecklistItem>) -> Self {
        let completed_count = items.iter().filter(|item| item.completed).count();
        let progress =
            stk_progress::progress_percentage(completed_count as u32, items.len() as u32);

        Self {
            items,
            completed_count,
            progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn item(completed: bool) -> ChecklistItem {
        ChecklistItem {
            id: Uuid::new_v4(),
            text: "Review lecture notes".to_string(),
            completed,
            completed_by: completed.then(|| "John Doe".to_string()),
            timestamp: completed.then(chrono::Utc::now),
        }
    }

    #[test]
    fn test_from_items_counts_and_progress() {
        let response = ChecklistResponse::from_items(vec![item(true), item(false), item(true)]);

        assert_eq!(response.completed_count, 2);
        assert_eq!(response.progress, 67);
    }

    #[test]
    fn test_from_items_empty_list_is_zero_percent() {
        let response = ChecklistResponse::from_items(Vec::new());

        assert_eq!(response.completed_count, 0);
        assert_eq!(response.progress, 0);
    }
}
