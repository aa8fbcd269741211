//! Configuration management for h2obuddy.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! resolved by [`DataStorage`]. Every section is optional; a missing file or a
//! missing section means "use the defaults".
//!
//! ```rust,no_run
//! use h2obuddy::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("history shows {} days", config.history_limit());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::intake::DEFAULT_HISTORY_LIMIT;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Location of the SQLite database.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// Absolute path of the database file. Defaults to `h2obuddy.db` in the data directory.
    pub path: PathBuf,
}

/// Presentation of the intake history.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HistoryConfig {
    /// Number of most recent distinct days to list.
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig { limit: DEFAULT_HISTORY_LIMIT }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<HistoryConfig>,
}

impl Config {
    /// Reads the configuration from the default data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads the configuration from `storage`, falling back to defaults when
    /// no file exists yet.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete_from(storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Configured history length; a hand-edited zero falls back to the default.
    pub fn history_limit(&self) -> usize {
        self.history
            .as_ref()
            .map(|history| history.limit)
            .filter(|&limit| limit > 0)
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
    }

    pub fn database_path(&self) -> Option<PathBuf> {
        self.database.as_ref().map(|database| database.path.clone())
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "database".to_string(),
                name: Message::ConfigModuleDatabase.to_string(),
            },
            ConfigModule {
                key: "history".to_string(),
                name: Message::ConfigModuleHistory.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "database" => {
                    let default = match config.database_path() {
                        Some(path) => path,
                        None => DataStorage::new().get_path(crate::db::db::DB_FILE_NAME)?,
                    };
                    msg_print!(Message::ConfigModuleDatabase);
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabasePath.to_string())
                        .default(default.to_string_lossy().into_owned())
                        .interact_text()?;
                    config.database = Some(DatabaseConfig { path: PathBuf::from(path) });
                }
                "history" => {
                    let default = config.history.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleHistory);
                    config.history = Some(HistoryConfig {
                        limit: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptHistoryLimit.to_string())
                            .default(default.limit)
                            .validate_with(|limit: &usize| if *limit > 0 { Ok(()) } else { Err(Message::InvalidInput.to_string()) })
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
