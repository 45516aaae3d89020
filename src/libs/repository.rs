//! Storage abstraction shared by the local database and the remote store.
//!
//! Commands never talk to SQLite or HTTP directly. They open a [`Store`],
//! chosen from the configuration, and go through [`TaskRepository`]. Both
//! backends normalize and validate drafts before persisting them; only the
//! local store insists on a due date.
//!
//! ```rust,no_run
//! use taskmaster::libs::config::Config;
//! use taskmaster::libs::repository::{Store, TaskRepository};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let store = Store::from_config(&Config::read()?)?;
//! for task in store.list().await? {
//!     println!("{}", task.title);
//! }
//! # Ok(())
//! # }
//! ```

use super::config::Config;
use super::task::{Task, TaskDraft};
use crate::api::remote::RemoteStore;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;

/// CRUD operations over persisted tasks.
#[allow(async_fn_in_trait)]
pub trait TaskRepository {
    /// Every stored task, in backend order.
    async fn list(&self) -> Result<Vec<Task>>;

    /// Persists a new task and returns it with its assigned id and timestamps.
    ///
    /// # Errors
    ///
    /// Fails with a [`ValidationError`](super::task::ValidationError) when
    /// the draft breaks an entry rule, or with the backend's error.
    async fn create(&mut self, draft: TaskDraft) -> Result<Task>;

    /// Replaces the editable fields of task `id` with `draft`.
    async fn update(&mut self, id: &str, draft: TaskDraft) -> Result<Task>;

    async fn delete(&mut self, id: &str) -> Result<()>;

    /// Whether drafts must carry a due date to be accepted.
    fn requires_due_date(&self) -> bool;

    async fn get(&self, id: &str) -> Result<Option<Task>> {
        Ok(self.list().await?.into_iter().find(|task| task.id == id))
    }
}

/// The configured task backend.
pub enum Store {
    Local(Tasks),
    Remote(RemoteStore),
}

impl Store {
    /// Opens the remote store when one is configured, the local database
    /// otherwise.
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.remote {
            Some(remote) => {
                msg_debug!(Message::UsingRemoteStore(remote.api_url.clone()));
                Ok(Store::Remote(RemoteStore::new(remote)))
            }
            None => {
                let tasks = Tasks::new()?;
                msg_debug!(Message::UsingLocalStore(tasks.path().display().to_string()));
                Ok(Store::Local(tasks))
            }
        }
    }
}

impl TaskRepository for Store {
    async fn list(&self) -> Result<Vec<Task>> {
        match self {
            Store::Local(tasks) => tasks.list().await,
            Store::Remote(remote) => remote.list().await,
        }
    }

    async fn create(&mut self, draft: TaskDraft) -> Result<Task> {
        match self {
            Store::Local(tasks) => tasks.create(draft).await,
            Store::Remote(remote) => remote.create(draft).await,
        }
    }

    async fn update(&mut self, id: &str, draft: TaskDraft) -> Result<Task> {
        match self {
            Store::Local(tasks) => tasks.update(id, draft).await,
            Store::Remote(remote) => remote.update(id, draft).await,
        }
    }

    async fn delete(&mut self, id: &str) -> Result<()> {
        match self {
            Store::Local(tasks) => tasks.delete(id).await,
            Store::Remote(remote) => remote.delete(id).await,
        }
    }

    fn requires_due_date(&self) -> bool {
        match self {
            Store::Local(tasks) => tasks.requires_due_date(),
            Store::Remote(remote) => remote.requires_due_date(),
        }
    }

    async fn get(&self, id: &str) -> Result<Option<Task>> {
        match self {
            Store::Local(tasks) => tasks.get(id).await,
            Store::Remote(remote) => remote.get(id).await,
        }
    }
}
