//! Calendar bucketing over a sliding window of days.
//!
//! The calendar view shows a fixed run of consecutive days (seven by default).
//! Each day collects the tasks that start or are due on it; a task whose start
//! and due date fall on the same day is listed once for that day. Tasks with
//! neither date never show up.
//!
//! ## Day keys
//!
//! Days are identified by their canonical `YYYY-MM-DD` key, derived from the
//! local calendar date. A moment in time is first reduced to the local day it
//! falls on, so late-evening timestamps never slip into the neighbouring UTC
//! day.
//!
//! ## Navigation
//!
//! Paging is non-overlapping: [`Window::next`] and [`Window::previous`] move by
//! the full window length. [`Window::jump_to`] re-anchors the window on any
//! day, aligned or not.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use taskmaster::libs::calendar::{bucket, Window};
//!
//! let window = Window::starting(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
//! let buckets = bucket(&[], &window);
//! assert_eq!(buckets.len(), 7);
//! assert!(buckets.contains_key("2024-06-09"));
//! ```

use super::task::{format_date, Task};
use chrono::{DateTime, Days, Duration, Local, NaiveDate, TimeZone};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

/// Number of days shown when no length is configured.
pub const DEFAULT_WINDOW_LENGTH: u32 = 7;

/// Longest window the calendar renders.
pub const MAX_WINDOW_LENGTH: u32 = 366;

/// A run of consecutive calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: NaiveDate,
    length: u32,
}

impl Window {
    /// Creates a window of `length` days beginning at `start`, with the
    /// length clamped to `1..=MAX_WINDOW_LENGTH`.
    pub fn new(start: NaiveDate, length: u32) -> Self {
        Self {
            start,
            length: length.clamp(1, MAX_WINDOW_LENGTH),
        }
    }

    pub fn starting(start: NaiveDate) -> Self {
        Self::new(start, DEFAULT_WINDOW_LENGTH)
    }

    /// Window starting at the local day `moment` falls on.
    pub fn containing<Tz: TimeZone>(moment: &DateTime<Tz>, length: u32) -> Self {
        Self::new(moment.date_naive(), length)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn end(&self) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(u64::from(self.length - 1)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Every day of the window, in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take(self.length as usize).collect()
    }

    /// Canonical keys of every day of the window, in order.
    pub fn keys(&self) -> Vec<String> {
        self.days().iter().map(day_key).collect()
    }

    pub fn next(&self) -> Self {
        self.page(1)
    }

    pub fn previous(&self) -> Self {
        self.page(-1)
    }

    /// Shifts the window by `offset` whole windows. Shifts past the supported
    /// date range leave the window where it is.
    pub fn page(&self, offset: i64) -> Self {
        let shifted = Duration::try_days(offset.saturating_mul(i64::from(self.length)))
            .and_then(|shift| self.start.checked_add_signed(shift));
        match shifted {
            Some(start) => Self { start, ..*self },
            None => *self,
        }
    }

    /// Re-anchors the window on `date`, keeping its length.
    pub fn jump_to(&self, date: NaiveDate) -> Self {
        Self { start: date, ..*self }
    }
}

/// Canonical `YYYY-MM-DD` key for a day.
pub fn day_key(date: &NaiveDate) -> String {
    format_date(date)
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether `key` names `today`.
pub fn is_today(key: &str, today: NaiveDate) -> bool {
    key == day_key(&today)
}

/// Groups `tasks` into one bucket per day of `window`.
///
/// Every day of the window has an entry, empty or not. A task joins a day's
/// bucket when its start or due date is that day, at most once per day (by
/// identifier). Buckets are ordered by status precedence, then title.
pub fn bucket(tasks: &[Task], window: &Window) -> BTreeMap<String, Vec<Task>> {
    window
        .days()
        .iter()
        .map(|date| (day_key(date), tasks_on(tasks, *date)))
        .collect()
}

fn tasks_on(tasks: &[Task], date: NaiveDate) -> Vec<Task> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut day: Vec<Task> = Vec::new();
    for task in tasks {
        if DayRole::of(task, date).is_some() && seen.insert(task.id.as_str()) {
            day.push(task.clone());
        }
    }
    day.sort_by(compare_within_day);
    day
}

/// Order inside a single day: status precedence, then title.
pub fn compare_within_day(a: &Task, b: &Task) -> Ordering {
    a.status
        .cmp(&b.status)
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.title.cmp(&b.title))
}

/// Why a task appears on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRole {
    Starts,
    Due,
    StartsAndDue,
}

impl DayRole {
    pub fn of(task: &Task, date: NaiveDate) -> Option<Self> {
        let starts = task.start_date == Some(date);
        let due = task.due_date == Some(date);
        match (starts, due) {
            (true, true) => Some(DayRole::StartsAndDue),
            (true, false) => Some(DayRole::Starts),
            (false, true) => Some(DayRole::Due),
            (false, false) => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayRole::Starts => "Starts Today",
            DayRole::Due => "Due Today",
            DayRole::StartsAndDue => "Starts & Due",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub task: Task,
    pub role: DayRole,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub key: String,
    pub is_today: bool,
    pub entries: Vec<CalendarEntry>,
}

impl CalendarDay {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A bucketed window ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    pub window: Window,
    pub days: Vec<CalendarDay>,
}

impl Calendar {
    pub fn build(tasks: &[Task], window: &Window, today: NaiveDate) -> Self {
        let mut buckets = bucket(tasks, window);
        let days = window
            .days()
            .into_iter()
            .map(|date| {
                let key = day_key(&date);
                let entries = buckets
                    .remove(&key)
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|task| DayRole::of(&task, date).map(|role| CalendarEntry { task, role }))
                    .collect();
                CalendarDay {
                    is_today: is_today(&key, today),
                    date,
                    key,
                    entries,
                }
            })
            .collect();

        Self { window: *window, days }
    }

    /// True when no day of the window has any task.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(CalendarDay::is_empty)
    }
}
