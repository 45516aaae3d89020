use super::form::prompt_draft;
use super::{invalid_task, parse_date_arg, parse_status_arg};
use crate::api::suggest::{is_diagnostic, Suggester};
use crate::libs::calendar::today;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::repository::{Store, TaskRepository};
use crate::libs::task::{split_names, TaskDraft, TaskStatus};
use crate::libs::view::View;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title. Without it, every field is prompted for.
    title: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    /// todo, in-progress or completed
    #[arg(long, value_parser = parse_status_arg)]
    status: Option<TaskStatus>,

    /// Comma-separated names
    #[arg(short, long)]
    assignees: Option<String>,

    /// Comma-separated names
    #[arg(long)]
    stakeholders: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    start: Option<NaiveDate>,

    /// Due date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    due: Option<NaiveDate>,

    /// Completion date for a completed task (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_date_arg)]
    completed: Option<NaiveDate>,

    #[arg(short, long)]
    comments: Option<String>,

    /// Fill an empty description with a suggested one
    #[arg(long)]
    suggest: bool,
}

pub async fn cmd(add_args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = Store::from_config(&config)?;
    let suggester = Suggester::new(config.suggest.as_ref());

    let draft = match &add_args.title {
        Some(title) => {
            let mut draft = draft_from_args(title, &add_args);
            if add_args.suggest && draft.description.is_none() {
                let suggestion = suggester.suggest(&draft.title).await;
                if is_diagnostic(&suggestion) {
                    msg_warning!(suggestion);
                } else {
                    draft.description = Some(suggestion);
                }
            }
            draft
        }
        None => {
            let initial = draft_from_args("", &add_args);
            prompt_draft(&initial, store.requires_due_date(), add_args.suggest.then_some(&suggester)).await?
        }
    };

    let task = store.create(draft).await.map_err(invalid_task)?;
    msg_success!(Message::TaskCreated(task.title.clone()));
    View::task(&task)?;

    Ok(())
}

fn draft_from_args(title: &str, args: &AddArgs) -> TaskDraft {
    let mut draft = TaskDraft {
        title: title.to_string(),
        description: args.description.clone(),
        assignees: args.assignees.as_deref().map(split_names).unwrap_or_default(),
        stakeholders: args.stakeholders.as_deref().map(split_names).unwrap_or_default(),
        start_date: args.start,
        due_date: args.due,
        actual_completion_date: args.completed,
        comments: args.comments.clone(),
        ..TaskDraft::default()
    };
    draft.set_status(args.status.unwrap_or_default(), today());

    draft
}
