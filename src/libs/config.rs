//! Configuration management for taskmaster.
//!
//! Settings are stored as pretty-printed JSON in the per-user data directory
//! (see [`DataStorage`]). Every module is optional and omitted from the file
//! while unset, so a fresh install runs with no configuration at all: tasks go
//! to the local SQLite store, the calendar shows seven days and description
//! suggestions report that no API key is configured.
//!
//! ## Modules
//!
//! - **Remote**: base URL of the document store serving `get-tasks` and
//!   `add-task`. When present, it replaces the local store.
//! - **Suggest**: Gemini API key, model and endpoint for description drafts.
//!   The key may instead come from `GEMINI_API_KEY` or `API_KEY` (a `.env` file
//!   in the working directory is loaded at startup).
//! - **Calendar**: number of days in the calendar window.
//!
//! ```rust,no_run
//! use taskmaster::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(remote) = &config.remote {
//!     println!("Tasks are stored at {}", remote.api_url);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::remote::RemoteConfig;
use crate::api::suggest::SuggestConfig;
use crate::libs::calendar::{DEFAULT_WINDOW_LENGTH, MAX_WINDOW_LENGTH};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Identifier used to route the wizard
    pub key: String,
    /// Name shown in the module picker
    pub name: String,
}

/// Calendar view settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalendarConfig {
    /// Number of consecutive days shown, and the distance moved by one page.
    pub window_length: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            window_length: DEFAULT_WINDOW_LENGTH,
        }
    }
}

/// Root configuration object. Unset modules are left out of the JSON file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Remote document store. When unset, tasks live in the local database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,

    /// Description suggestion service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggest: Option<SuggestConfig>,

    /// Calendar view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<CalendarConfig>,
}

impl Config {
    /// Reads the configuration from the data directory, falling back to the
    /// defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from an explicit file.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration to the data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Writes the configuration as pretty-printed JSON to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Calendar window length, configured or default, within `1..=MAX_WINDOW_LENGTH`.
    pub fn window_length(&self) -> u32 {
        self.calendar
            .as_ref()
            .map_or(DEFAULT_WINDOW_LENGTH, |c| c.window_length.clamp(1, MAX_WINDOW_LENGTH))
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    ///
    /// The user picks which modules to configure; each selected module is
    /// prompted for its fields with the current values pre-filled. The
    /// returned configuration is not saved.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            RemoteConfig::module(),
            SuggestConfig::module(),
            ConfigModule {
                key: "calendar".to_string(),
                name: "Calendar".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "remote" => config.remote = Some(RemoteConfig::init(&config.remote)?),
                "suggest" => config.suggest = Some(SuggestConfig::init(&config.suggest)?),
                "calendar" => {
                    let default = config.calendar.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleCalendar);
                    config.calendar = Some(CalendarConfig {
                        window_length: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptWindowLength.to_string())
                            .default(default.window_length)
                            .validate_with(|days: &u32| {
                                if (1..=MAX_WINDOW_LENGTH).contains(days) {
                                    Ok(())
                                } else {
                                    Err(format!("must be between 1 and {}", MAX_WINDOW_LENGTH))
                                }
                            })
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
