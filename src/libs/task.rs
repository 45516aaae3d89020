//! Task data model, status lifecycle and entry validation.
//!
//! A [`Task`] is the unit every other part of the application works on: the
//! repositories persist it, the filter, sort and calendar engines read it, and
//! the console views render it. Edits never patch single fields; a complete
//! [`TaskDraft`] replaces the stored record.
//!
//! ## Date contract
//!
//! Calendar dates (`startDate`, `dueDate`, `actualCompletionDate`) are plain
//! days with no time component and travel as zero-padded `YYYY-MM-DD` strings.
//! They are held as [`NaiveDate`], whose ordering matches the lexicographic
//! ordering of that canonical form, so comparisons done on either side agree.
//! Older clients sent full ISO-8601 timestamps for these fields; those are
//! accepted on read and cut down to their date part.
//!
//! ## Status lifecycle
//!
//! `actualCompletionDate` only exists on completed tasks. Moving a draft into
//! [`TaskStatus::Completed`] stamps today's date unless one is already set, and
//! moving it anywhere else clears the date.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use taskmaster::libs::task::{TaskDraft, TaskStatus};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
//! let mut draft = TaskDraft::new("Write release notes");
//! draft.set_status(TaskStatus::Completed, today);
//! assert_eq!(draft.actual_completion_date, Some(today));
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical textual form of a calendar day.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Workflow status of a task.
///
/// Variants are declared in workflow order; the derived `Ord` is the display
/// and sort precedence (`Todo < InProgress < Completed`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To Do")]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskStatus {
    /// All statuses in precedence order.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    /// Accepts both the wire labels ("In Progress") and CLI spellings
    /// ("in-progress", "in_progress", "inprogress").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "inprogress" => Ok(TaskStatus::InProgress),
            "completed" | "done" => Ok(TaskStatus::Completed),
            _ => Err(format!("unknown status '{}', expected one of: todo, in-progress, completed", s)),
        }
    }
}

/// Errors raised when a draft is checked before it reaches a repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required.")]
    MissingTitle,
    #[error("Due date is required.")]
    MissingDueDate,
    #[error("Start date cannot be after due date.")]
    StartAfterDue,
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// A stored task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque identifier assigned by the repository. Older records used `id`.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stakeholders: Vec<String>,
    #[serde(default, deserialize_with = "lenient_date::deserialize", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date::deserialize", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date::deserialize", skip_serializing_if = "Option::is_none")]
    pub actual_completion_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Returns the editable part of the record, used as the starting point of
    /// a full-record replacement.
    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            assignees: self.assignees.clone(),
            stakeholders: self.stakeholders.clone(),
            start_date: self.start_date,
            due_date: self.due_date,
            actual_completion_date: self.actual_completion_date,
            comments: self.comments.clone(),
        }
    }
}

/// Task fields a user can set: everything except the identifier and the
/// repository-managed timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stakeholders: Vec<String>,
    #[serde(default, deserialize_with = "lenient_date::deserialize", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date::deserialize", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date::deserialize", skip_serializing_if = "Option::is_none")]
    pub actual_completion_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl TaskDraft {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    /// Moves the draft to `status`, keeping `actual_completion_date` in step.
    ///
    /// Entering `Completed` stamps `today` only when no completion date is
    /// set yet, so re-saving a completed task keeps its original date. Any
    /// other status clears the date.
    pub fn set_status(&mut self, status: TaskStatus, today: NaiveDate) {
        self.status = status;
        if status == TaskStatus::Completed {
            if self.actual_completion_date.is_none() {
                self.actual_completion_date = Some(today);
            }
        } else {
            self.actual_completion_date = None;
        }
    }

    /// Checks the entry rules a draft must satisfy before it is persisted.
    pub fn validate(&self, require_due_date: bool) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if require_due_date && self.due_date.is_none() {
            return Err(ValidationError::MissingDueDate);
        }
        if let (Some(start), Some(due)) = (self.start_date, self.due_date) {
            if start > due {
                return Err(ValidationError::StartAfterDue);
            }
        }
        Ok(())
    }

    /// Normalizes free text the way the edit form does before saving: text is
    /// trimmed, blank optionals become `None`, blank names are dropped and a
    /// non-completed draft never carries a completion date.
    pub fn normalized(self) -> Self {
        let trim_opt = |value: Option<String>| value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let trim_names = |names: Vec<String>| {
            names
                .into_iter()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect::<Vec<_>>()
        };

        let actual_completion_date = match self.status {
            TaskStatus::Completed => self.actual_completion_date,
            _ => None,
        };

        Self {
            title: self.title.trim().to_string(),
            description: trim_opt(self.description),
            status: self.status,
            assignees: trim_names(self.assignees),
            stakeholders: trim_names(self.stakeholders),
            start_date: self.start_date,
            due_date: self.due_date,
            actual_completion_date,
            comments: trim_opt(self.comments),
        }
    }

    /// Builds the stored record once a repository has assigned identity.
    pub fn into_task(self, id: String, created_at: DateTime<Utc>, updated_at: Option<DateTime<Utc>>) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            assignees: self.assignees,
            stakeholders: self.stakeholders,
            start_date: self.start_date,
            due_date: self.due_date,
            actual_completion_date: self.actual_completion_date,
            comments: self.comments,
            created_at,
            updated_at,
        }
    }
}

/// Renders a date in its canonical `YYYY-MM-DD` form.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a strictly zero-padded `YYYY-MM-DD` string.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(ValidationError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// Parses a stored date that may be a bare day or a full ISO-8601 timestamp.
pub fn parse_stored_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    match value.get(10..11) {
        Some("T") | Some(" ") => parse_date(&value[..10]),
        _ => parse_date(value),
    }
}

/// Splits a comma-separated list of names, dropping blanks.
pub fn split_names(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

mod lenient_date {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => super::parse_stored_date(value).map(Some).map_err(D::Error::custom),
        }
    }
}
