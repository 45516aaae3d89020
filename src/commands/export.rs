//! Task export for backup and spreadsheets.
//!
//! - **JSON**: the wire format, readable again by `import`
//! - **CSV**: one row per task with name lists flattened into single cells
//!
//! Exported tasks go through the same filter flags as `list` and come out in
//! the same workflow order.

use super::FilterArgs;
use crate::libs::config::Config;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::filter::filter;
use crate::libs::messages::Message;
use crate::libs::repository::{Store, TaskRepository};
use crate::libs::sort::sort;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: ExportFormat,

    /// Output file; defaults to `taskmaster_export_<timestamp>.<ext>` in the
    /// current directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(export_args: ExportArgs) -> Result<()> {
    let store = Store::from_config(&Config::read()?)?;
    let tasks = sort(&filter(&store.list().await?, &export_args.filter.to_criteria()));

    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    let exporter = Exporter::new(export_args.format, export_args.output);
    exporter.export(&tasks)?;
    msg_success!(Message::ExportCompleted(tasks.len(), exporter.output_path().display().to_string()));

    Ok(())
}
