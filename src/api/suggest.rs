//! Description suggestions from a Gemini text model.
//!
//! [`Suggester::suggest`] never fails. Every problem (no key, blank title,
//! transport or upstream error, empty answer) comes back as a fixed
//! diagnostic sentence that can be shown in place of the description, and
//! [`is_diagnostic`] tells the two apart.

use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-04-17";
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables consulted, in order, when no key is configured.
const API_KEY_ENV: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];
const API_KEY_HEADER: &str = "x-goog-api-key";
const INVALID_KEY_MARKER: &str = "API key not valid";

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize, Debug)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize, Debug)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts concatenated.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.parts.iter().filter_map(|part| part.text.as_deref()).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct Suggester {
    client: Client,
    api_key: Option<String>,
    model: String,
    api_url: String,
}

impl Suggester {
    /// Builds a client from the saved settings, falling back to the
    /// environment for the key and to the defaults for model and endpoint.
    pub fn new(config: Option<&SuggestConfig>) -> Self {
        let configured_key = config.map(|c| c.api_key.clone()).filter(|key| !key.trim().is_empty());
        let api_key = configured_key.or_else(|| {
            API_KEY_ENV
                .iter()
                .find_map(|name| env::var(name).ok().filter(|key| !key.trim().is_empty()))
        });

        let model = config.map(|c| c.model.clone()).filter(|m| !m.trim().is_empty());
        let api_url = config.map(|c| c.api_url.clone()).filter(|u| !u.trim().is_empty());

        Self::from_parts(api_key, model, api_url)
    }

    pub fn from_parts(api_key: Option<String>, model: Option<String>, api_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }

    /// Drafts a description for `title`, or returns a diagnostic sentence.
    pub async fn suggest(&self, title: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return Message::SuggestApiKeyMissing.to_string();
        };
        if title.trim().is_empty() {
            return Message::SuggestTitleMissing.to_string();
        }

        match self.generate(api_key, &prompt(title)).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => Message::SuggestEmptyResponse.to_string(),
            Err(e) => {
                msg_debug!(Message::SuggestionRequestFailed(e.to_string()));
                if e.to_string().contains(INVALID_KEY_MARKER) {
                    Message::SuggestInvalidApiKey.to_string()
                } else {
                    Message::SuggestApiError.to_string()
                }
            }
        }
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.api_url.trim_end_matches('/'), self.model);
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });

        let res = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            anyhow::bail!("{}: {}", status, text);
        }

        Ok(res.json::<GenerateResponse>().await?.text())
    }
}

fn prompt(title: &str) -> String {
    format!(
        "Generate a concise and actionable task description for a task titled: \"{}\". The description should be suitable for a task management app. Keep it brief, ideally 1-2 sentences. If the title is vague, try to make a reasonable suggestion.",
        title
    )
}

/// Whether `text` is one of the fixed diagnostics rather than a suggestion.
pub fn is_diagnostic(text: &str) -> bool {
    [
        Message::SuggestApiKeyMissing,
        Message::SuggestTitleMissing,
        Message::SuggestEmptyResponse,
        Message::SuggestInvalidApiKey,
        Message::SuggestApiError,
    ]
    .iter()
    .any(|message| message.to_string() == text)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SuggestConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            api_key: "".to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl SuggestConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "suggest".to_string(),
            name: "Description suggestions".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleSuggest);
        Ok(Self {
            api_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSuggestApiKey.to_string())
                .default(config.api_key)
                .allow_empty(true)
                .interact_text()?,
            model: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSuggestModel.to_string())
                .default(config.model)
                .interact_text()?,
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSuggestApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
