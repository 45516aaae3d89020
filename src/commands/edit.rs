use super::form::prompt_draft;
use super::{invalid_task, parse_date_arg, parse_status_arg, resolve_task};
use crate::libs::calendar::today;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::repository::{Store, TaskRepository};
use crate::libs::task::{split_names, TaskDraft, TaskStatus};
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id, or an unambiguous prefix of it
    id: String,

    #[arg(short, long)]
    title: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    /// todo, in-progress or completed
    #[arg(long, value_parser = parse_status_arg)]
    status: Option<TaskStatus>,

    /// Comma-separated names, replacing the current list
    #[arg(short, long)]
    assignees: Option<String>,

    /// Comma-separated names, replacing the current list
    #[arg(long)]
    stakeholders: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    start: Option<NaiveDate>,

    /// Due date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    due: Option<NaiveDate>,

    /// Completion date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    completed: Option<NaiveDate>,

    #[arg(short, long)]
    comments: Option<String>,
}

impl EditArgs {
    fn has_overrides(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.status.is_some()
            || self.assignees.is_some()
            || self.stakeholders.is_some()
            || self.start.is_some()
            || self.due.is_some()
            || self.completed.is_some()
            || self.comments.is_some()
    }

    /// Applies the flags given on the command line on top of `draft`.
    fn apply(&self, mut draft: TaskDraft) -> TaskDraft {
        if let Some(title) = &self.title {
            draft.title = title.clone();
        }
        if let Some(description) = &self.description {
            draft.description = Some(description.clone());
        }
        if let Some(assignees) = &self.assignees {
            draft.assignees = split_names(assignees);
        }
        if let Some(stakeholders) = &self.stakeholders {
            draft.stakeholders = split_names(stakeholders);
        }
        if self.start.is_some() {
            draft.start_date = self.start;
        }
        if self.due.is_some() {
            draft.due_date = self.due;
        }
        if let Some(comments) = &self.comments {
            draft.comments = Some(comments.clone());
        }
        if self.completed.is_some() {
            draft.actual_completion_date = self.completed;
        }
        if let Some(status) = self.status {
            draft.set_status(status, today());
        }

        draft
    }
}

pub async fn cmd(edit_args: EditArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = Store::from_config(&config)?;
    let task = resolve_task(&store, &edit_args.id).await?;
    let original = task.draft();

    let interactive = !edit_args.has_overrides();
    let draft = if interactive {
        msg_print!(Message::CurrentTaskState, true);
        View::task(&task)?;
        msg_print!(Message::EditingTask(task.title.clone()), true);
        prompt_draft(&original, store.requires_due_date(), None).await?
    } else {
        edit_args.apply(original.clone()).normalized()
    };

    if draft == original.normalized() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    if interactive
        && !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmTaskUpdate.to_string())
            .default(true)
            .interact()?
    {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let updated = store.update(&task.id, draft).await.map_err(invalid_task)?;
    msg_success!(Message::TaskUpdated(updated.title.clone()));
    View::task(&updated)?;

    Ok(())
}
