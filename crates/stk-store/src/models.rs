use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Student account, always carries an academic year
    Student,
    /// Faculty account, tracks syllabus topics
    Faculty,
}

/// Application page, serialized as the frontend's page identifiers
/// (`"login"`, `"student-dashboard"`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// The unauthenticated landing page
    Login,
    /// Student progress overview
    StudentDashboard,
    /// Faculty topic tracking
    FacultyDashboard,
    /// Weekly timetable, student variant
    StudentTimetable,
    /// Weekly timetable, faculty variant
    FacultyTimetable,
}

impl Page {
    /// Landing page right after login for the given role.
    pub const fn dashboard_for(role: Role) -> Self {
        match role {
            Role::Student => Self::StudentDashboard,
            Role::Faculty => Self::FacultyDashboard,
        }
    }

    /// Whether the given role may navigate to this page.
    ///
    /// `Login` is never a navigation target while authenticated; a session
    /// only returns there by logging out.
    pub const fn allowed_for(self, role: Role) -> bool {
        match self {
            Self::Login => false,
            Self::StudentDashboard | Self::StudentTimetable => matches!(role, Role::Student),
            Self::FacultyDashboard | Self::FacultyTimetable => matches!(role, Role::Faculty),
        }
    }
}

/// User model - synthesized at login, immutable for the session's lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Account role
    pub role: Role,
    /// Email address as entered on the login form
    pub email: String,
    /// Academic year (1-4), students only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u8>,
}

/// Topic model - one syllabus unit tracked per subject and year
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Unique topic identifier
    pub id: Uuid,
    /// Topic name
    pub name: String,
    /// Topic description
    pub description: String,
    /// Date the topic is scheduled to be taught
    pub scheduled_date: NaiveDate,
    /// When the topic was marked complete; present iff `is_completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
    /// Completion flag
    pub is_completed: bool,
    /// Subject the topic belongs to
    pub subject: String,
    /// Academic year (1-4) the topic is taught in
    pub year: u8,
}

/// Payload for creating a new topic; the id and completion state are assigned
/// by the session
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTopic {
    /// Topic name
    pub name: String,
    /// Topic description
    pub description: String,
    /// Date the topic is scheduled to be taught
    pub scheduled_date: NaiveDate,
    /// Subject the topic belongs to
    pub subject: String,
    /// Academic year (1-4) the topic is taught in
    pub year: u8,
}

/// Subject model - aggregate topic counters rendered as charts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Unique subject identifier
    pub id: Uuid,
    /// Subject name
    pub name: String,
    /// Total number of topics in the subject
    pub total_topics: u32,
    /// Number of completed topics, never exceeds `total_topics`
    pub completed_topics: u32,
    /// Chart color as a hex string
    pub color: String,
}

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Something needs attention
    Warning,
    /// Informational message
    Info,
    /// Positive outcome
    Success,
}

/// Notification model - display-only in the current scope; the `read` flag is
/// never mutated (mark-as-read is intentionally unimplemented)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier
    pub id: Uuid,
    /// Notification message
    pub message: String,
    /// Severity
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// When the notification was raised
    pub timestamp: DateTime<Utc>,
    /// Read flag; unread notifications drive the badge counter
    pub read: bool,
}

/// Kind of a timetable slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// Regular lecture
    Lecture,
    /// Laboratory session
    Lab,
    /// Tutorial session
    Tutorial,
}

/// Timetable slot model - one fixed (day, time) entry; the seed guarantees at
/// most one slot per (day, time) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableSlot {
    /// Unique slot identifier
    pub id: Uuid,
    /// Weekday name ("Monday" .. "Friday")
    pub day: String,
    /// Time range ("09:00-10:00")
    pub time: String,
    /// Subject taught in the slot
    pub subject: String,
    /// Room the slot takes place in
    pub room: String,
    /// Kind of session
    #[serde(rename = "type")]
    pub kind: SlotKind,
}

/// Checklist item model - a to-do entry with completion attribution;
/// `completed_by`/`timestamp` are present iff `completed`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Unique item identifier
    pub id: Uuid,
    /// Item text
    pub text: String,
    /// Completion flag
    pub completed: bool,
    /// Who completed the item; present iff `completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
    /// When the item was completed; present iff `completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_serializes_as_frontend_identifier() {
        let json = serde_json::to_string(&Page::StudentDashboard).expect("serialize page");
        assert_eq!(json, "\"student-dashboard\"");

        let page: Page = serde_json::from_str("\"faculty-timetable\"").expect("parse page");
        assert_eq!(page, Page::FacultyTimetable);
    }

    #[test]
    fn test_dashboard_for_role() {
        assert_eq!(Page::dashboard_for(Role::Student), Page::StudentDashboard);
        assert_eq!(Page::dashboard_for(Role::Faculty), Page::FacultyDashboard);
    }

    #[test]
    fn test_page_role_guard() {
        assert!(Page::StudentTimetable.allowed_for(Role::Student));
        assert!(Page::FacultyTimetable.allowed_for(Role::Faculty));

        // Cross-role pages are rejected
        assert!(!Page::FacultyTimetable.allowed_for(Role::Student));
        assert!(!Page::StudentDashboard.allowed_for(Role::Faculty));

        // Login is only reachable through logout
        assert!(!Page::Login.allowed_for(Role::Student));
        assert!(!Page::Login.allowed_for(Role::Faculty));
    }

    #[test]
    fn test_notification_kind_uses_type_field() {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: "Math assignment due tomorrow".to_string(),
            kind: NotificationKind::Warning,
            timestamp: Utc::now(),
            read: false,
        };

        let json = serde_json::to_value(&notification).expect("serialize notification");
        assert_eq!(json["type"], "warning");
    }
}
