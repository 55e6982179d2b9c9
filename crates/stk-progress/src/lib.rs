//! Progress aggregation library for Syllabus Tracker
//!
//! This crate provides the pure derived-value functions behind the dashboards:
//! completion percentages, overall course progress, schedule classification of
//! topics, and unread notification counts. Everything here is a total function
//! over a snapshot of the data; nothing is cached between calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Schedule classification of a syllabus topic.
///
/// Derived at query time, never stored: the same topic can classify as
/// `Upcoming` today and `Overdue` tomorrow without being mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicStatus {
    /// The topic has been marked complete
    Completed,
    /// The topic is scheduled for the reference date
    Today,
    /// The topic's scheduled date is strictly in the past and it is not complete
    Overdue,
    /// The topic's scheduled date is in the future
    Upcoming,
}

/// Completion percentage, rounded to the nearest integer.
///
/// Returns 0 when `total` is 0 instead of dividing by zero; an empty subject
/// or checklist reads as 0% progress.
///
/// # Examples
/// ```
/// use stk_progress::progress_percentage;
///
/// assert_eq!(progress_percentage(15, 20), 75);
/// assert_eq!(progress_percentage(0, 0), 0);
/// ```
pub fn progress_percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }

    (f64::from(completed) / f64::from(total) * 100.0).round() as u32
}

/// Overall progress across several `(completed, total)` counters.
///
/// Sums both sides first, then applies the same guarded rounding as
/// [`progress_percentage`], so subjects are weighted by their topic count
/// rather than averaged per subject.
///
/// # Examples
/// ```
/// use stk_progress::overall_progress;
///
/// // round(100 * 27 / 38) = 71
/// assert_eq!(overall_progress([(15, 20), (12, 18)]), 71);
/// assert_eq!(overall_progress([]), 0);
/// ```
pub fn overall_progress<I>(counts: I) -> u32
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let (completed, total) = counts
        .into_iter()
        .fold((0u32, 0u32), |(c, t), (completed, total)| {
            (c + completed, t + total)
        });

    progress_percentage(completed, total)
}

/// Classify a topic against a reference date.
///
/// Completion wins over any scheduling state. The reference date is supplied
/// by the caller so the classification stays a pure function; route handlers
/// pass today's date at render time.
pub fn topic_status(is_completed: bool, scheduled_date: NaiveDate, today: NaiveDate) -> TopicStatus {
    if is_completed {
        TopicStatus::Completed
    } else if scheduled_date == today {
        TopicStatus::Today
    } else if scheduled_date < today {
        TopicStatus::Overdue
    } else {
        TopicStatus::Upcoming
    }
}

/// Count the unread entries in a sequence of read flags.
pub fn unread_count<I>(read_flags: I) -> usize
where
    I: IntoIterator<Item = bool>,
{
    read_flags.into_iter().filter(|read| !read).count()
}
