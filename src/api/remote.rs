use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::repository::TaskRepository;
use crate::libs::task::{Task, TaskDraft};
use crate::{msg_debug, msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

const GET_TASKS_URL: &str = "get-tasks";
const ADD_TASK_URL: &str = "add-task";

/// Error document returned by the task store on failure.
#[derive(Deserialize, Debug, Default)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// HTTP client for the remote document store.
///
/// The store exposes only listing and creation. Edits and deletions are
/// rejected with a displayable error before any request is made.
#[derive(Debug)]
pub struct RemoteStore {
    client: Client,
    config: RemoteConfig,
}

impl RemoteStore {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), endpoint)
    }

    /// Fetches every task document, newest first.
    pub async fn fetch_tasks(&self) -> Result<Vec<Task>> {
        let url = self.url(GET_TASKS_URL);
        msg_debug!(format!("GET {}", url));

        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| msg_error_anyhow!(Message::RemoteRequestFailed(e.to_string())))?;
        let res = Self::check_status(res).await?;

        Ok(res.json::<Vec<Task>>().await?)
    }

    /// Posts a draft and returns the stored document.
    pub async fn add_task(&self, draft: &TaskDraft) -> Result<Task> {
        let url = self.url(ADD_TASK_URL);
        msg_debug!(format!("POST {}", url));

        let res = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| msg_error_anyhow!(Message::RemoteRequestFailed(e.to_string())))?;
        let res = Self::check_status(res).await?;

        Ok(res.json::<Task>().await?)
    }

    /// Turns a non-2xx response into an error carrying the server's own
    /// explanation when it sent one.
    async fn check_status(res: Response) -> Result<Response> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }

        let body = res.text().await.unwrap_or_default();
        Err(match error_text(&body) {
            Some(text) => msg_error_anyhow!(Message::RemoteRequestFailed(text)),
            None => msg_error_anyhow!(Message::RemoteHttpStatus(status.as_u16())),
        })
    }
}

/// Extracts the `error` (or `message`) field of a JSON error document.
pub fn error_text(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.error.or(parsed.message).filter(|text| !text.trim().is_empty())
}

impl TaskRepository for RemoteStore {
    async fn list(&self) -> Result<Vec<Task>> {
        self.fetch_tasks().await
    }

    async fn create(&mut self, draft: TaskDraft) -> Result<Task> {
        let draft = draft.normalized();
        draft.validate(self.requires_due_date())?;
        self.add_task(&draft).await
    }

    async fn update(&mut self, _id: &str, _draft: TaskDraft) -> Result<Task> {
        Err(msg_error_anyhow!(Message::RemoteUpdateUnsupported))
    }

    async fn delete(&mut self, _id: &str) -> Result<()> {
        Err(msg_error_anyhow!(Message::RemoteDeleteUnsupported))
    }

    fn requires_due_date(&self) -> bool {
        false
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RemoteConfig {
    pub api_url: String,
}

impl RemoteConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "remote".to_string(),
            name: "Remote task store".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self { api_url: "".to_string() });
        msg_print!(Message::ConfigModuleRemote);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRemoteApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
