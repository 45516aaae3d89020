//! Command-line interface.
//!
//! Every subcommand lives in its own module exposing an `Args` struct and a
//! `cmd` function. Commands open the configured [`Store`], take one snapshot
//! of the tasks and hand it to the pure engines in [`crate::libs`].

pub mod add;
pub mod calendar;
pub mod delete;
pub mod edit;
pub mod export;
pub mod form;
pub mod import;
pub mod init;
pub mod list;
pub mod suggest;

use crate::libs::filter::{DateRange, FilterCriteria, StatusFilter};
use crate::libs::messages::Message;
use crate::libs::repository::{Store, TaskRepository};
use crate::libs::task::{parse_date, Task, TaskStatus, ValidationError};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the task store, suggestions and calendar")]
    Init(init::InitArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "List tasks in workflow order")]
    List(list::ListArgs),
    #[command(about = "Show tasks starting or due over a run of days")]
    Calendar(calendar::CalendarArgs),
    #[command(about = "Suggest a description for a task title")]
    Suggest(suggest::SuggestArgs),
    #[command(about = "Export tasks to JSON or CSV")]
    Export(export::ExportArgs),
    #[command(about = "Import tasks from a JSON file")]
    Import(import::ImportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Calendar(args) => calendar::cmd(args).await,
            Commands::Suggest(args) => suggest::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Import(args) => import::cmd(args).await,
        }
    }
}

/// Filter flags shared by `list` and `calendar`.
#[derive(Debug, Args, Default, Clone)]
pub struct FilterArgs {
    /// Case-insensitive text matched against titles, descriptions, names, dates and comments
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only tasks with this status: all, todo, in-progress or completed
    #[arg(long, value_parser = parse_status_filter_arg)]
    pub status: Option<StatusFilter>,

    /// Earliest start date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub start_from: Option<NaiveDate>,

    /// Latest start date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub start_to: Option<NaiveDate>,

    /// Earliest completion date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub completed_from: Option<NaiveDate>,

    /// Latest completion date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub completed_to: Option<NaiveDate>,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_term: self.search.clone(),
            status: self.status.unwrap_or_default(),
            start_date_range: DateRange::new(self.start_from, self.start_to),
            completion_date_range: DateRange::new(self.completed_from, self.completed_to),
        }
    }
}

pub fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

pub fn parse_status_arg(value: &str) -> Result<TaskStatus, String> {
    value.parse()
}

pub fn parse_status_filter_arg(value: &str) -> Result<StatusFilter, String> {
    value.parse()
}

/// Finds the task named by `id`, accepting any unambiguous prefix of it.
pub async fn resolve_task(store: &Store, id: &str) -> Result<Task> {
    if let Some(task) = store.get(id).await? {
        return Ok(task);
    }

    let mut candidates: Vec<Task> = store.list().await?.into_iter().filter(|task| task.id.starts_with(id)).collect();
    match (id.is_empty(), candidates.len()) {
        (false, 1) => Ok(candidates.remove(0)),
        (false, count) if count > 1 => Err(msg_error_anyhow!(Message::TaskIdAmbiguous(id.to_string(), count))),
        _ => Err(msg_error_anyhow!(Message::TaskNotFound(id.to_string()))),
    }
}

/// Rewords a rejected draft as a user-facing message, passing other errors through.
pub fn invalid_task(error: anyhow::Error) -> anyhow::Error {
    match error.downcast_ref::<ValidationError>() {
        Some(invalid) => msg_error_anyhow!(Message::TaskInvalid(invalid.to_string())),
        None => error,
    }
}
