use super::{parse_date_arg, FilterArgs};
use crate::libs::calendar::{today, Calendar, Window, MAX_WINDOW_LENGTH};
use crate::libs::config::Config;
use crate::libs::filter::filter;
use crate::libs::repository::{Store, TaskRepository};
use crate::libs::view::View;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct CalendarArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// First day of the window (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_date_arg)]
    from: Option<NaiveDate>,

    /// Windows to move forward, or back when negative
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    page: i64,

    /// Number of days shown; defaults to the configured length
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_LENGTH)))]
    days: Option<u32>,
}

pub async fn cmd(calendar_args: CalendarArgs) -> Result<()> {
    let config = Config::read()?;
    let store = Store::from_config(&config)?;
    let tasks = store.list().await?;

    let today = today();
    let length = calendar_args.days.unwrap_or_else(|| config.window_length());
    let window = Window::new(calendar_args.from.unwrap_or(today), length).page(calendar_args.page);

    let visible = filter(&tasks, &calendar_args.filter.to_criteria());
    View::calendar(&Calendar::build(&visible, &window, today))?;

    Ok(())
}
