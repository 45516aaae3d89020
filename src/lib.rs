//! # Taskmaster
//!
//! A personal task tracker for the command line.
//!
//! ## Features
//!
//! - **Tasks**: title, description, workflow status, assignees, stakeholders,
//!   start, due and completion dates, comments
//! - **List view**: free-text search, status and date-range filters, ordered by
//!   workflow status, due date, completion date and age
//! - **Calendar view**: tasks starting or due over a pageable run of days
//! - **Storage**: a local SQLite database, or a remote document store
//! - **Suggestions**: task descriptions drafted by a Gemini text model
//! - **Export / import**: JSON and CSV
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmaster::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
