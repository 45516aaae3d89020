//! Versioned schema migrations for the local task database.
//!
//! Each migration has a version number, a name and a function that applies it
//! inside a transaction. Applied versions are recorded in the `migrations`
//! table; opening a database applies every newer migration in order, all in a
//! single transaction, so a failed upgrade leaves the file untouched.
//!
//! ## History
//!
//! - **v1** `create_tasks_table`: the original local schema.
//! - **v2** `add_updated_at`: last-modification timestamp, matching the
//!   remote document schema.
//! - **v3** `normalize_timestamp_dates`: calendar dates written as full
//!   ISO-8601 timestamps by older clients are cut down to `YYYY-MM-DD`.
//! - **v4** `add_task_date_indices`: indices for date lookups.
//!
//! ```rust,no_run
//! use taskmaster::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("taskmaster.db")?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 4);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Date columns that hold plain calendar days.
const DATE_COLUMNS: [&str; 3] = ["start_date", "due_date", "actual_completion_date"];

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of every known migration, in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        self.add_migration(1, "create_tasks_table", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
        id TEXT NOT NULL PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT,
        status TEXT NOT NULL DEFAULT 'To Do',
        assignees TEXT NOT NULL DEFAULT '[]',
        stakeholders TEXT NOT NULL DEFAULT '[]',
        start_date TEXT,
        due_date TEXT,
        actual_completion_date TEXT,
        comments TEXT,
        created_at TEXT NOT NULL
    )",
                [],
            )?;
            Ok(())
        });

        self.add_migration(2, "add_updated_at", |tx| {
            tx.execute("ALTER TABLE tasks ADD COLUMN updated_at TEXT", [])?;
            Ok(())
        });

        self.add_migration(3, "normalize_timestamp_dates", |tx| {
            for column in DATE_COLUMNS {
                tx.execute(
                    &format!(
                        "UPDATE tasks SET {column} = substr({column}, 1, 10) WHERE length({column}) > 10"
                    ),
                    [],
                )?;
            }
            Ok(())
        });

        self.add_migration(4, "add_task_date_indices", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_start_date ON tasks(start_date)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_due_date ON tasks(due_date)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_created_at ON tasks(created_at)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the recorded schema version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        // A fresh database is silent; upgrades of existing ones are reported.
        if current_version > 0 {
            msg_info!(Message::MigrationsFound(self.latest_version() as usize - current_version as usize));
            msg_success!(Message::AllMigrationsCompleted);
        }

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn
            .query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))
            .unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: i32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
