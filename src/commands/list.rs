use super::FilterArgs;
use crate::libs::config::Config;
use crate::libs::filter::filter;
use crate::libs::messages::Message;
use crate::libs::repository::{Store, TaskRepository};
use crate::libs::sort::sort;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Show every field of each task instead of the table
    #[arg(short, long)]
    full: bool,
}

pub async fn cmd(list_args: ListArgs) -> Result<()> {
    let store = Store::from_config(&Config::read()?)?;
    let tasks = store.list().await?;

    let visible = sort(&filter(&tasks, &list_args.filter.to_criteria()));
    if visible.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader(visible.len(), tasks.len()), true);
    if list_args.full {
        for task in &visible {
            View::task(task)?;
            msg_print!("");
        }
    } else {
        View::tasks(&visible)?;
    }

    Ok(())
}
