use serde::Serialize;
use stk_store::models::Notification;

/// Notification dropdown payload; the unread count drives the bell badge.
/// There is no mark-as-read route: the dropdown is display-only
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}
