use super::db::Db;
use crate::libs::messages::Message;
use crate::libs::repository::TaskRepository;
use crate::libs::task::{format_date, parse_stored_date, Task, TaskDraft, TaskStatus};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const TASK_COLUMNS: &str = "id, title, description, status, assignees, stakeholders, start_date, due_date, actual_completion_date, comments, created_at, updated_at";
const INSERT_TASK: &str = "INSERT INTO tasks (id, title, description, status, assignees, stakeholders, start_date, due_date, actual_completion_date, comments, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, status = ?4, assignees = ?5, stakeholders = ?6, start_date = ?7, due_date = ?8, actual_completion_date = ?9, comments = ?10, updated_at = ?11 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";

/// Local SQLite task store.
pub struct Tasks {
    conn: Connection,
    path: PathBuf,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        Ok(Tasks { conn: db.conn, path: db.path })
    }

    /// Opens the store backed by the database file at `path`.
    pub fn open(path: &Path) -> Result<Tasks> {
        let db = Db::open(path)?;
        Ok(Tasks { conn: db.conn, path: db.path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All tasks, newest first.
    pub fn fetch_all(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("SELECT {} FROM tasks ORDER BY created_at DESC", TASK_COLUMNS))?;
        let tasks = stmt.query_map([], task_from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(&format!("SELECT {} FROM tasks WHERE id = ?1", TASK_COLUMNS), params![id], task_from_row)
            .optional()?;

        Ok(task)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;
        Ok(usize::try_from(count)?)
    }

    /// Stores a validated draft under a fresh id.
    pub fn insert(&mut self, draft: TaskDraft) -> Result<Task> {
        let task = draft.into_task(Uuid::new_v4().to_string(), Utc::now(), None);

        self.conn.execute(
            INSERT_TASK,
            params![
                task.id,
                task.title,
                task.description,
                task.status.label(),
                serde_json::to_string(&task.assignees)?,
                serde_json::to_string(&task.stakeholders)?,
                task.start_date.as_ref().map(format_date),
                task.due_date.as_ref().map(format_date),
                task.actual_completion_date.as_ref().map(format_date),
                task.comments,
                task.created_at.to_rfc3339(),
                task.updated_at.map(|t| t.to_rfc3339()),
            ],
        )?;

        Ok(task)
    }

    /// Replaces every editable field of task `id`, keeping its creation time.
    pub fn replace(&mut self, id: &str, draft: TaskDraft) -> Result<Task> {
        let existing = self
            .get_by_id(id)?
            .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(id.to_string())))?;
        let task = draft.into_task(existing.id, existing.created_at, Some(Utc::now()));

        self.conn.execute(
            UPDATE_TASK,
            params![
                task.id,
                task.title,
                task.description,
                task.status.label(),
                serde_json::to_string(&task.assignees)?,
                serde_json::to_string(&task.stakeholders)?,
                task.start_date.as_ref().map(format_date),
                task.due_date.as_ref().map(format_date),
                task.actual_completion_date.as_ref().map(format_date),
                task.comments,
                task.updated_at.map(|t| t.to_rfc3339()),
            ],
        )?;

        Ok(task)
    }

    pub fn remove(&mut self, id: &str) -> Result<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound(id.to_string())));
        }

        Ok(())
    }
}

impl TaskRepository for Tasks {
    async fn list(&self) -> Result<Vec<Task>> {
        self.fetch_all()
    }

    async fn create(&mut self, draft: TaskDraft) -> Result<Task> {
        let draft = draft.normalized();
        draft.validate(self.requires_due_date())?;
        self.insert(draft)
    }

    async fn update(&mut self, id: &str, draft: TaskDraft) -> Result<Task> {
        let draft = draft.normalized();
        draft.validate(self.requires_due_date())?;
        self.replace(id, draft)
    }

    async fn delete(&mut self, id: &str) -> Result<()> {
        self.remove(id)
    }

    fn requires_due_date(&self) -> bool {
        true
    }

    async fn get(&self, id: &str) -> Result<Option<Task>> {
        self.get_by_id(id)
    }
}

fn conversion_error(idx: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, message.into())
}

fn date_column(row: &Row, idx: usize) -> rusqlite::Result<Option<NaiveDate>> {
    match row.get::<_, Option<String>>(idx)? {
        Some(value) if !value.trim().is_empty() => parse_stored_date(&value)
            .map(Some)
            .map_err(|e| conversion_error(idx, e.to_string())),
        _ => Ok(None),
    }
}

fn names_column(row: &Row, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw).map_err(|e| conversion_error(idx, e.to_string()))
}

fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<Option<DateTime<Utc>>> {
    match row.get::<_, Option<String>>(idx)? {
        Some(value) => DateTime::parse_from_rfc3339(&value)
            .map(|t| Some(t.with_timezone(&Utc)))
            .map_err(|e| conversion_error(idx, e.to_string())),
        None => Ok(None),
    }
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    let status: String = row.get(3)?;
    let created_at = timestamp_column(row, 10)?.ok_or_else(|| conversion_error(10, "missing created_at".to_string()))?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: status.parse::<TaskStatus>().map_err(|e| conversion_error(3, e))?,
        assignees: names_column(row, 4)?,
        stakeholders: names_column(row, 5)?,
        start_date: date_column(row, 6)?,
        due_date: date_column(row, 7)?,
        actual_completion_date: date_column(row, 8)?,
        comments: row.get(9)?,
        created_at,
        updated_at: timestamp_column(row, 11)?,
    })
}
