//! Interactive task form shared by `add` and `edit`.

use crate::api::suggest::{is_diagnostic, Suggester};
use crate::libs::calendar::today;
use crate::libs::messages::Message;
use crate::libs::task::{format_date, parse_date, split_names, TaskDraft, TaskStatus};
use crate::{msg_print, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Walks the user through every field of `initial`, pre-filling the current
/// values. When a suggester is given and the draft has no description yet,
/// a drafted description is offered first.
pub async fn prompt_draft(initial: &TaskDraft, require_due_date: bool, suggester: Option<&Suggester>) -> Result<TaskDraft> {
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .with_initial_text(initial.title.clone())
        .validate_with(|input: &String| if input.trim().is_empty() { Err("Title is required.") } else { Ok(()) })
        .interact_text()?;

    let mut description = initial.description.clone().unwrap_or_default();
    if let (Some(suggester), true) = (suggester, description.trim().is_empty()) {
        let suggestion = suggester.suggest(&title).await;
        if is_diagnostic(&suggestion) {
            msg_warning!(suggestion);
        } else {
            msg_print!(Message::SuggestedDescription);
            msg_print!(suggestion);
            if Confirm::with_theme(&theme)
                .with_prompt(Message::PromptUseSuggestion.to_string())
                .default(true)
                .interact()?
            {
                description = suggestion;
            }
        }
    }
    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .with_initial_text(description)
        .allow_empty(true)
        .interact_text()?;

    let statuses: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.label()).collect();
    let status_index = TaskStatus::ALL.iter().position(|s| *s == initial.status).unwrap_or(0);
    let status = TaskStatus::ALL[Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&statuses)
        .default(status_index)
        .interact()?];

    let assignees = prompt_names(&theme, Message::PromptTaskAssignees, &initial.assignees)?;
    let stakeholders = prompt_names(&theme, Message::PromptTaskStakeholders, &initial.stakeholders)?;

    let start_date = prompt_date(&theme, Message::PromptTaskStartDate, initial.start_date, false, None)?;
    let due_date = prompt_date(&theme, Message::PromptTaskDueDate, initial.due_date, require_due_date, start_date)?;

    let mut draft = TaskDraft {
        title,
        description: Some(description),
        status: initial.status,
        assignees,
        stakeholders,
        start_date,
        due_date,
        actual_completion_date: initial.actual_completion_date,
        comments: None,
    };
    draft.set_status(status, today());
    if draft.status == TaskStatus::Completed {
        draft.actual_completion_date = prompt_date(
            &theme,
            Message::PromptTaskCompletionDate,
            draft.actual_completion_date,
            true,
            None,
        )?;
    }

    let comments: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskComments.to_string())
        .with_initial_text(initial.comments.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    draft.comments = Some(comments);

    Ok(draft.normalized())
}

fn prompt_names(theme: &ColorfulTheme, prompt: Message, current: &[String]) -> Result<Vec<String>> {
    let input: String = Input::with_theme(theme)
        .with_prompt(prompt.to_string())
        .with_initial_text(current.join(", "))
        .allow_empty(true)
        .interact_text()?;

    Ok(split_names(&input))
}

/// Prompts for an optional date. `not_before` rejects dates earlier than it.
fn prompt_date(
    theme: &ColorfulTheme,
    prompt: Message,
    current: Option<NaiveDate>,
    required: bool,
    not_before: Option<NaiveDate>,
) -> Result<Option<NaiveDate>> {
    let input: String = Input::with_theme(theme)
        .with_prompt(prompt.to_string())
        .with_initial_text(current.as_ref().map(format_date).unwrap_or_default())
        .allow_empty(!required)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                return if required { Err("A date is required.".to_string()) } else { Ok(()) };
            }
            let date = parse_date(input).map_err(|e| e.to_string())?;
            match not_before {
                Some(start) if date < start => Err("Start date cannot be after due date.".to_string()),
                _ => Ok(()),
            }
        })
        .interact_text()?;

    if input.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(parse_date(&input)?))
}
