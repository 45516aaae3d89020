use super::calendar::Calendar;
use super::messages::Message;
use super::task::{format_date, Task};
use crate::msg_print;
use anyhow::Result;
use prettytable::{format, row, Table};

/// Longest description shown in the task list before it is cut.
const DESCRIPTION_PREVIEW_LEN: usize = 150;

pub struct View {}

impl View {
    /// Prints the task list as a table, in the order given.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            "ID",
            "STATUS",
            "TITLE",
            "DESCRIPTION",
            "START",
            "DUE",
            "COMPLETED",
            "ASSIGNEES",
            "STAKEHOLDERS"
        ]);
        for task in tasks {
            table.add_row(row![
                short_id(&task.id),
                task.status,
                task.title,
                preview(task.description.as_deref().unwrap_or_default(), DESCRIPTION_PREVIEW_LEN),
                date_cell(&task.start_date),
                date_cell(&task.due_date),
                date_cell(&task.actual_completion_date),
                task.assignees.join(", "),
                task.stakeholders.join(", ")
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints every field of one task.
    pub fn task(task: &Task) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["Title", task.title]);
        table.add_row(row!["Description", task.description.as_deref().unwrap_or_default()]);
        table.add_row(row!["Status", task.status]);
        table.add_row(row!["Assignees", task.assignees.join(", ")]);
        table.add_row(row!["Stakeholders", task.stakeholders.join(", ")]);
        table.add_row(row!["Start date", date_cell(&task.start_date)]);
        table.add_row(row!["Due date", date_cell(&task.due_date)]);
        table.add_row(row!["Completed on", date_cell(&task.actual_completion_date)]);
        table.add_row(row!["Comments", task.comments.as_deref().unwrap_or_default()]);
        table.add_row(row!["Created", task.created_at.format("%Y-%m-%d %H:%M").to_string()]);
        if let Some(updated_at) = task.updated_at {
            table.add_row(row!["Updated", updated_at.format("%Y-%m-%d %H:%M").to_string()]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints the calendar window one day at a time.
    pub fn calendar(calendar: &Calendar) -> Result<()> {
        msg_print!(Message::CalendarHeader(
            format_date(&calendar.window.start()),
            format_date(&calendar.window.end())
        ));

        if calendar.is_empty() {
            msg_print!(Message::CalendarWindowEmpty(calendar.window.length()), true);
            return Ok(());
        }

        for day in &calendar.days {
            let marker = if day.is_today { " (today)" } else { "" };
            msg_print!(format!("\n{} {}{}", day.date.format("%a"), day.key, marker));

            if day.is_empty() {
                msg_print!(Message::CalendarDayEmpty);
                continue;
            }

            let mut table = Table::new();
            table.add_row(row!["STATUS", "TITLE", "ROLE"]);
            for entry in &day.entries {
                table.add_row(row![entry.task.status, entry.task.title, entry.role.label()]);
            }
            table.printstd();
        }

        Ok(())
    }
}

fn date_cell(date: &Option<chrono::NaiveDate>) -> String {
    date.as_ref().map(format_date).unwrap_or_default()
}

/// First eight characters of an id, enough to tell tasks apart on screen.
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Cuts `text` to at most `max` characters, marking the cut with an ellipsis.
pub fn preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}
