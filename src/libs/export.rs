//! Task export and import.
//!
//! Exports write the task list either as the JSON wire format (the same
//! documents the remote store serves, so an export can be imported anywhere)
//! or as a flat CSV sheet with one row per task. Imports read a JSON array of
//! task documents. Identity and timestamps in an imported file are ignored:
//! the receiving repository assigns fresh ones, so only the editable fields
//! are read. Documents written before the `_id` field rename are accepted.
//!
//! ```rust,no_run
//! use taskmaster::libs::export::{ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(&[])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::task::{format_date, Task, TaskDraft};
use anyhow::Result;
use chrono::Local;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// JSON array of task documents
    Json,
    /// Comma-separated values, one row per task
    Csv,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Separator used to flatten name lists into one CSV cell.
const NAME_SEPARATOR: &str = "; ";

const CSV_HEADER: [&str; 12] = [
    "ID",
    "Title",
    "Description",
    "Status",
    "Assignees",
    "Stakeholders",
    "Start Date",
    "Due Date",
    "Completion Date",
    "Comments",
    "Created At",
    "Updated At",
];

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Exporter writing to `output_path`, or to a timestamped file in the
    /// working directory when no path is given.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "taskmaster_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `tasks` to the output file.
    pub fn export(&self, tasks: &[Task]) -> Result<()> {
        let file = File::create(&self.output_path)?;
        self.write_to(tasks, file)
    }

    /// Writes `tasks` in the configured format to any writer.
    pub fn write_to<W: Write>(&self, tasks: &[Task], mut writer: W) -> Result<()> {
        match self.format {
            ExportFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, tasks)?;
                writer.flush()?;
            }
            ExportFormat::Csv => write_csv(tasks, writer)?,
        }
        Ok(())
    }
}

fn write_csv<W: Write>(tasks: &[Task], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    let date = |d: &Option<chrono::NaiveDate>| d.as_ref().map(format_date).unwrap_or_default();
    for task in tasks {
        wtr.write_record(&[
            task.id.clone(),
            task.title.clone(),
            task.description.clone().unwrap_or_default(),
            task.status.to_string(),
            task.assignees.join(NAME_SEPARATOR),
            task.stakeholders.join(NAME_SEPARATOR),
            date(&task.start_date),
            date(&task.due_date),
            date(&task.actual_completion_date),
            task.comments.clone().unwrap_or_default(),
            task.created_at.to_rfc3339(),
            task.updated_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Reads the editable fields of every document in a JSON task array.
pub fn read_import<R: Read>(reader: R) -> Result<Vec<TaskDraft>> {
    let drafts: Vec<TaskDraft> = serde_json::from_reader(BufReader::new(reader))?;
    Ok(drafts)
}

/// Reads an import file from disk.
pub fn read_import_file(path: &Path) -> Result<Vec<TaskDraft>> {
    read_import(File::open(path)?)
}
