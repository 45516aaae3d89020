use crate::libs::config::Config;
use crate::libs::export::read_import_file;
use crate::libs::messages::Message;
use crate::libs::repository::{Store, TaskRepository};
use crate::libs::task::ValidationError;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file holding an array of task documents
    path: PathBuf,
}

/// Creates every task found in the file. Records the store rejects as
/// invalid are reported and skipped; any other failure stops the import.
pub async fn cmd(import_args: ImportArgs) -> Result<()> {
    let drafts = read_import_file(&import_args.path)?;
    if drafts.is_empty() {
        msg_info!(Message::ImportEmpty);
        return Ok(());
    }

    let mut store = Store::from_config(&Config::read()?)?;
    let mut imported = 0;
    for draft in drafts {
        let title = draft.title.clone();
        match store.create(draft).await {
            Ok(_) => imported += 1,
            Err(e) => match e.downcast_ref::<ValidationError>() {
                Some(invalid) => msg_warning!(Message::ImportSkipped(title, invalid.to_string())),
                None => return Err(e),
            },
        }
    }

    msg_success!(Message::ImportCompleted(imported));
    Ok(())
}
