//! Fixed sample data seeded into every fresh session.
//!
//! The tracker is fully mock: collections are generated here at login and
//! never reloaded from an external source. Items are appended or toggled in
//! place afterwards; nothing is deleted.

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{
    ChecklistItem, Notification, NotificationKind, Role, SlotKind, Subject, TimetableSlot, Topic,
};

/// Weekday axis of the timetable grid
pub const DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Time-slot axis of the timetable grid
pub const TIME_SLOTS: [&str; 3] = ["09:00-10:00", "10:00-11:00", "11:00-12:00"];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Seeded syllabus topics for a fresh faculty session
pub fn seed_topics() -> Vec<Topic> {
    vec![
        Topic {
            id: Uuid::new_v4(),
            name: "Introduction to Calculus".to_string(),
            description: "Basic concepts of differentiation and integration".to_string(),
            scheduled_date: date(2024, 1, 15),
            completed_date: Some(
                date(2024, 1, 15)
                    .and_hms_opt(0, 0, 0)
                    .expect("valid seed time")
                    .and_utc(),
            ),
            is_completed: true,
            subject: "Mathematics".to_string(),
            year: 1,
        },
        Topic {
            id: Uuid::new_v4(),
            name: "Linear Algebra".to_string(),
            description: "Vectors, matrices and linear transformations".to_string(),
            scheduled_date: date(2024, 1, 20),
            completed_date: None,
            is_completed: false,
            subject: "Mathematics".to_string(),
            year: 1,
        },
        Topic {
            id: Uuid::new_v4(),
            name: "Probability Theory".to_string(),
            description: "Basic probability concepts and distributions".to_string(),
            scheduled_date: date(2024, 1, 25),
            completed_date: None,
            is_completed: false,
            subject: "Mathematics".to_string(),
            year: 2,
        },
    ]
}

/// Seeded subject counters for a fresh student session
pub fn seed_subjects() -> Vec<Subject> {
    [
        ("Mathematics", 20, 15, "#3B82F6"),
        ("Physics", 18, 12, "#10B981"),
        ("Chemistry", 16, 14, "#F59E0B"),
        ("Biology", 22, 8, "#EF4444"),
        ("English", 15, 13, "#8B5CF6"),
    ]
    .into_iter()
    .map(|(name, total_topics, completed_topics, color)| Subject {
        id: Uuid::new_v4(),
        name: name.to_string(),
        total_topics,
        completed_topics,
        color: color.to_string(),
    })
    .collect()
}

/// Seeded notifications, role-specific
pub fn seed_notifications(role: Role) -> Vec<Notification> {
    let now = Utc::now();

    match role {
        Role::Faculty => vec![
            Notification {
                id: Uuid::new_v4(),
                message: "Linear Algebra topic is 2 days behind schedule".to_string(),
                kind: NotificationKind::Warning,
                timestamp: now,
                read: false,
            },
            Notification {
                id: Uuid::new_v4(),
                message: "Calculus module completed successfully".to_string(),
                kind: NotificationKind::Success,
                timestamp: now - Duration::hours(1),
                read: true,
            },
        ],
        Role::Student => vec![
            Notification {
                id: Uuid::new_v4(),
                message: "Physics exam in 3 days - Chapter 5 & 6".to_string(),
                kind: NotificationKind::Warning,
                timestamp: now,
                read: false,
            },
            Notification {
                id: Uuid::new_v4(),
                message: "Math assignment due tomorrow".to_string(),
                kind: NotificationKind::Warning,
                timestamp: now - Duration::hours(1),
                read: false,
            },
            Notification {
                id: Uuid::new_v4(),
                message: "Complete Chemistry lab report by Friday".to_string(),
                kind: NotificationKind::Info,
                timestamp: now - Duration::hours(2),
                read: true,
            },
        ],
    }
}

/// Seeded checklist items; two carry completion attribution
pub fn seed_checklist() -> Vec<ChecklistItem> {
    let now = Utc::now();

    vec![
        ChecklistItem {
            id: Uuid::new_v4(),
            text: "Complete Chapter 5 exercises".to_string(),
            completed: true,
            completed_by: Some("John Doe".to_string()),
            timestamp: Some(now - Duration::hours(1)),
        },
        ChecklistItem {
            id: Uuid::new_v4(),
            text: "Submit lab report".to_string(),
            completed: false,
            completed_by: None,
            timestamp: None,
        },
        ChecklistItem {
            id: Uuid::new_v4(),
            text: "Review lecture notes".to_string(),
            completed: true,
            completed_by: Some("Jane Smith".to_string()),
            timestamp: Some(now - Duration::hours(2)),
        },
    ]
}

/// Seeded weekly timetable; at most one slot per (day, time) pair
pub fn seed_timetable() -> Vec<TimetableSlot> {
    [
        ("Monday", "09:00-10:00", "Mathematics", "Room 101", SlotKind::Lecture),
        ("Monday", "10:00-11:00", "Physics", "Room 102", SlotKind::Lecture),
        ("Monday", "11:00-12:00", "Chemistry", "Lab 201", SlotKind::Lab),
        ("Tuesday", "09:00-10:00", "Biology", "Room 103", SlotKind::Lecture),
        ("Tuesday", "10:00-11:00", "English", "Room 104", SlotKind::Lecture),
        ("Tuesday", "11:00-12:00", "Mathematics", "Room 101", SlotKind::Tutorial),
        ("Wednesday", "09:00-10:00", "Physics", "Lab 202", SlotKind::Lab),
        ("Wednesday", "10:00-11:00", "Chemistry", "Room 102", SlotKind::Lecture),
        ("Thursday", "09:00-10:00", "Biology", "Lab 203", SlotKind::Lab),
        ("Thursday", "10:00-11:00", "English", "Room 104", SlotKind::Tutorial),
        ("Friday", "09:00-10:00", "Mathematics", "Room 101", SlotKind::Lecture),
        ("Friday", "10:00-11:00", "Physics", "Room 102", SlotKind::Tutorial),
    ]
    .into_iter()
    .map(|(day, time, subject, room, kind)| TimetableSlot {
        id: Uuid::new_v4(),
        day: day.to_string(),
        time: time.to_string(),
        subject: subject.to_string(),
        room: room.to_string(),
        kind,
    })
    .collect()
}
