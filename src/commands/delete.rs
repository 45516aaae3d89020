use super::resolve_task;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::repository::{Store, TaskRepository};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id, or an unambiguous prefix of it
    id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(delete_args: DeleteArgs) -> Result<()> {
    let mut store = Store::from_config(&Config::read()?)?;
    let task = resolve_task(&store, &delete_args.id).await?;

    let confirmed = delete_args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    store.delete(&task.id).await?;
    msg_success!(Message::TaskDeleted(task.title));

    Ok(())
}
