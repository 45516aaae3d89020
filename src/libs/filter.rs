//! Task filtering.
//!
//! A [`FilterCriteria`] is a set of independent axes: free-text search, status and
//! two date ranges. A task is kept only when it satisfies every axis that is
//! set; an axis left at its default imposes no restriction. Filtering never
//! reorders: the result is the input sequence with non-matching tasks removed.
//!
//! ```rust
//! use taskmaster::libs::filter::{filter, FilterCriteria, StatusFilter};
//! use taskmaster::libs::task::TaskStatus;
//!
//! let criteria = FilterCriteria {
//!     search_term: Some("review".to_string()),
//!     status: StatusFilter::Only(TaskStatus::Todo),
//!     ..FilterCriteria::default()
//! };
//! let visible = filter(&[], &criteria);
//! assert!(visible.is_empty());
//! ```

use super::task::{format_date, Task, TaskStatus};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Status axis of a filter. `All` is the "no restriction" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    pub fn admits(&self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<TaskStatus>().map(StatusFilter::Only)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

/// Inclusive date range with optional bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_unset(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// An unset range admits everything, including tasks without the date.
    /// Once either bound is set, a missing date no longer matches.
    pub fn admits(&self, date: Option<NaiveDate>) -> bool {
        if self.is_unset() {
            return true;
        }
        let Some(date) = date else {
            return false;
        };
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

/// Declarative filter applied conjunctively to a task snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: Option<String>,
    pub status: StatusFilter,
    pub start_date_range: DateRange,
    pub completion_date_range: DateRange,
}

impl FilterCriteria {
    /// True when no axis restricts anything.
    pub fn is_empty(&self) -> bool {
        self.search_term.as_deref().map_or(true, str::is_empty)
            && self.status == StatusFilter::All
            && self.start_date_range.is_unset()
            && self.completion_date_range.is_unset()
    }

    pub fn matches(&self, task: &Task) -> bool {
        matches_search(task, self.search_term.as_deref().unwrap_or(""))
            && self.status.admits(task.status)
            && self.start_date_range.admits(task.start_date)
            && self.completion_date_range.admits(task.actual_completion_date)
    }
}

/// Returns the tasks matching `criteria`, in their original relative order.
pub fn filter(tasks: &[Task], criteria: &FilterCriteria) -> Vec<Task> {
    tasks.iter().filter(|task| criteria.matches(task)).cloned().collect()
}

/// Case-insensitive substring search over every text and date field.
fn matches_search(task: &Task, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
    let date_contains = |date: &Option<NaiveDate>| date.as_ref().is_some_and(|d| contains(&format_date(d)));

    contains(&task.title)
        || task.description.as_deref().is_some_and(contains)
        || task.assignees.iter().any(|a| contains(a))
        || task.stakeholders.iter().any(|s| contains(s))
        || date_contains(&task.start_date)
        || date_contains(&task.due_date)
        || date_contains(&task.actual_completion_date)
        || task.comments.as_deref().is_some_and(contains)
}
