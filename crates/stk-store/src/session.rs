use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{
    ChecklistItem, NewTopic, Notification, Page, Subject, TimetableSlot, Topic, User,
};
use crate::seed;

/// Per-login state tree.
///
/// A session owns its collections outright; nothing is shared between
/// sessions. The checklist looks collaborative in the UI but is deliberately
/// session-local, matching the mock nature of the data. Collections are
/// seeded once at construction and only ever appended to or toggled in place.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session identifier, carried in the auth token
    pub id: Uuid,
    /// The user this session belongs to
    pub user: User,
    /// Current page
    pub page: Page,
    /// Faculty year filter (1-4)
    pub selected_year: u8,
    /// Syllabus topics (faculty dashboard)
    pub topics: Vec<Topic>,
    /// Subject counters (student dashboard)
    pub subjects: Vec<Subject>,
    /// Role-specific notifications, display-only
    pub notifications: Vec<Notification>,
    /// Shared-looking checklist items
    pub checklist: Vec<ChecklistItem>,
    /// Static weekly timetable
    pub timetable: Vec<TimetableSlot>,
}

impl Session {
    /// Create a fresh session for a user, landing on the role's dashboard
    /// with all collections seeded.
    pub fn new(user: User) -> Self {
        let page = Page::dashboard_for(user.role);
        let notifications = seed::seed_notifications(user.role);

        Self {
            id: Uuid::new_v4(),
            page,
            selected_year: 1,
            topics: seed::seed_topics(),
            subjects: seed::seed_subjects(),
            notifications,
            checklist: seed::seed_checklist(),
            timetable: seed::seed_timetable(),
            user,
        }
    }

    /// Move to another page if the session's role is allowed there.
    ///
    /// Returns `false` without changing state for cross-role pages; the
    /// caller decides how to surface the rejection.
    pub fn navigate(&mut self, page: Page) -> bool {
        if !page.allowed_for(self.user.role) {
            return false;
        }

        self.page = page;
        true
    }

    /// Topics taught in the given year, in insertion order.
    pub fn topics_for_year(&self, year: u8) -> Vec<Topic> {
        self.topics
            .iter()
            .filter(|topic| topic.year == year)
            .cloned()
            .collect()
    }

    /// Change the faculty year filter. The value is validated upstream.
    pub fn select_year(&mut self, year: u8) {
        self.selected_year = year;
    }

    /// Flip a topic's completion flag.
    ///
    /// `completed_date` is stamped with `now` on completion and cleared on
    /// un-completion, keeping it present iff `is_completed`. Returns `None`
    /// for an unknown id.
    pub fn toggle_topic(&mut self, id: Uuid, now: DateTime<Utc>) -> Option<&Topic> {
        let topic = self.topics.iter_mut().find(|topic| topic.id == id)?;

        topic.is_completed = !topic.is_completed;
        topic.completed_date = topic.is_completed.then_some(now);

        Some(topic)
    }

    /// Append a new, not-yet-completed topic with a fresh id.
    pub fn add_topic(&mut self, new_topic: NewTopic) -> Topic {
        let topic = Topic {
            id: Uuid::new_v4(),
            name: new_topic.name,
            description: new_topic.description,
            scheduled_date: new_topic.scheduled_date,
            completed_date: None,
            is_completed: false,
            subject: new_topic.subject,
            year: new_topic.year,
        };

        self.topics.push(topic.clone());
        topic
    }

    /// Flip a checklist item's completion flag.
    ///
    /// Completion is attributed to the session's user with `now` as the
    /// timestamp; un-completion clears both fields. Returns `None` for an
    /// unknown id.
    pub fn toggle_checklist_item(&mut self, id: Uuid, now: DateTime<Utc>) -> Option<&ChecklistItem> {
        let completed_by = self.user.name.clone();
        let item = self.checklist.iter_mut().find(|item| item.id == id)?;

        item.completed = !item.completed;
        if item.completed {
            item.completed_by = Some(completed_by);
            item.timestamp = Some(now);
        } else {
            item.completed_by = None;
            item.timestamp = None;
        }

        Some(item)
    }

    /// Append a checklist item, trimming the text first.
    ///
    /// Whitespace-only input is a silent no-op (`None`) rather than an error,
    /// matching the checklist's forgiving add behavior.
    pub fn add_checklist_item(&mut self, text: &str) -> Option<ChecklistItem> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let item = ChecklistItem {
            id: Uuid::new_v4(),
            text: trimmed.to_string(),
            completed: false,
            completed_by: None,
            timestamp: None,
        };

        self.checklist.push(item.clone());
        Some(item)
    }

    /// The unique slot for a (day, time) pair, or `None` when the slot is free.
    pub fn lookup_slot(&self, day: &str, time: &str) -> Option<&TimetableSlot> {
        self.timetable
            .iter()
            .find(|slot| slot.day == day && slot.time == time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn student() -> User {
        User {
            id: Uuid::new_v4(),
            name: "John Doe".to_string(),
            role: Role::Student,
            email: "john.doe@example.com".to_string(),
            year: Some(2),
        }
    }

    fn faculty() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Dr. Smith".to_string(),
            role: Role::Faculty,
            email: "dr.smith@example.com".to_string(),
            year: None,
        }
    }

    #[test]
    fn test_new_session_lands_on_role_dashboard() {
        assert_eq!(Session::new(student()).page, Page::StudentDashboard);
        assert_eq!(Session::new(faculty()).page, Page::FacultyDashboard);
    }

    #[test]
    fn test_navigate_within_role() {
        let mut session = Session::new(student());

        assert!(session.navigate(Page::StudentTimetable));
        assert_eq!(session.page, Page::StudentTimetable);

        assert!(session.navigate(Page::StudentDashboard));
        assert_eq!(session.page, Page::StudentDashboard);
    }

    #[test]
    fn test_navigate_rejects_cross_role_pages() {
        let mut session = Session::new(student());

        assert!(!session.navigate(Page::FacultyTimetable));
        assert!(!session.navigate(Page::FacultyDashboard));
        assert!(!session.navigate(Page::Login));

        // Rejected navigation leaves the page untouched
        assert_eq!(session.page, Page::StudentDashboard);
    }

    #[test]
    fn test_topics_for_year_filters_exactly() {
        let session = Session::new(faculty());

        let year_1 = session.topics_for_year(1);
        assert_eq!(year_1.len(), 2);
        assert!(year_1.iter().all(|t| t.year == 1));

        let year_2 = session.topics_for_year(2);
        assert_eq!(year_2.len(), 1);
        assert_eq!(year_2[0].name, "Probability Theory");

        assert!(session.topics_for_year(4).is_empty());
    }

    #[test]
    fn test_toggle_topic_keeps_completion_invariant() {
        let mut session = Session::new(faculty());
        let id = session.topics[1].id;
        assert!(!session.topics[1].is_completed);

        let now = Utc::now();
        let topic = session.toggle_topic(id, now).expect("topic exists");
        assert!(topic.is_completed);
        assert_eq!(topic.completed_date, Some(now));

        // Toggling back restores the flag and clears the date
        let later = Utc::now();
        let topic = session.toggle_topic(id, later).expect("topic exists");
        assert!(!topic.is_completed);
        assert!(topic.completed_date.is_none());
    }

    #[test]
    fn test_toggle_topic_refreshes_completed_date() {
        let mut session = Session::new(faculty());
        let id = session.topics[0].id;
        let original_date = session.topics[0].completed_date;

        let now = Utc::now();
        session.toggle_topic(id, now).expect("topic exists");
        let topic = session.toggle_topic(id, now).expect("topic exists");

        // Double-toggle restores the flag but stamps a fresh timestamp
        assert!(topic.is_completed);
        assert_ne!(topic.completed_date, original_date);
    }

    #[test]
    fn test_toggle_topic_unknown_id() {
        let mut session = Session::new(faculty());
        assert!(session.toggle_topic(Uuid::new_v4(), Utc::now()).is_none());
    }

    #[test]
    fn test_add_topic_assigns_fresh_ids() {
        let mut session = Session::new(faculty());
        let new_topic = || NewTopic {
            name: "Complex Numbers".to_string(),
            description: "Argand plane and polar form".to_string(),
            scheduled_date: chrono::NaiveDate::from_ymd_opt(2024, 2, 5).expect("valid date"),
            subject: "Mathematics".to_string(),
            year: 2,
        };

        let first = session.add_topic(new_topic());
        let second = session.add_topic(new_topic());

        // Identical payloads still produce two distinct items
        assert_ne!(first.id, second.id);
        assert_eq!(session.topics_for_year(2).len(), 3);
        assert!(!first.is_completed);
        assert!(first.completed_date.is_none());
    }

    #[test]
    fn test_toggle_checklist_item_attributes_completion() {
        let mut session = Session::new(student());
        let open_item = session
            .checklist
            .iter()
            .find(|item| !item.completed)
            .expect("seed has an open item")
            .id;

        let item = session
            .toggle_checklist_item(open_item, Utc::now())
            .expect("item exists");
        assert!(item.completed);
        assert_eq!(item.completed_by.as_deref(), Some("John Doe"));
        assert!(item.timestamp.is_some());

        let item = session
            .toggle_checklist_item(open_item, Utc::now())
            .expect("item exists");
        assert!(!item.completed);
        assert!(item.completed_by.is_none());
        assert!(item.timestamp.is_none());
    }

    #[test]
    fn test_toggle_checklist_item_unknown_id() {
        let mut session = Session::new(student());
        assert!(
            session
                .toggle_checklist_item(Uuid::new_v4(), Utc::now())
                .is_none()
        );
    }

    #[test]
    fn test_add_checklist_item_trims_and_ignores_empty() {
        let mut session = Session::new(student());
        let before = session.checklist.len();

        assert!(session.add_checklist_item("").is_none());
        assert!(session.add_checklist_item("   \t  ").is_none());
        assert_eq!(session.checklist.len(), before);

        let item = session
            .add_checklist_item("  Prepare flashcards  ")
            .expect("non-empty text is appended");
        assert_eq!(item.text, "Prepare flashcards");
        assert!(!item.completed);
        assert_eq!(session.checklist.len(), before + 1);
    }

    #[test]
    fn test_lookup_slot() {
        let session = Session::new(student());

        let slot = session
            .lookup_slot("Monday", "09:00-10:00")
            .expect("scheduled slot");
        assert_eq!(slot.subject, "Mathematics");
        assert_eq!(slot.room, "Room 101");

        assert!(session.lookup_slot("Friday", "11:00-12:00").is_none());
    }
}
