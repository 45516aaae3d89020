//! Local persistence on SQLite.
//!
//! The database file lives in the per-user data directory next to the
//! configuration. Its schema is owned by the versioned migrations in
//! [`migrations`], applied every time a connection is opened.
//!
//! ```rust,no_run
//! use taskmaster::db::tasks::Tasks;
//! use taskmaster::libs::task::TaskDraft;
//!
//! let mut tasks = Tasks::new()?;
//! let mut draft = TaskDraft::new("Review code");
//! draft.due_date = chrono::NaiveDate::from_ymd_opt(2024, 6, 7);
//! tasks.insert(draft)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup.
pub mod db;

/// Versioned schema changes and their history.
pub mod migrations;

/// Task records: the local implementation of the task repository.
pub mod tasks;
