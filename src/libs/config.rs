//! Configuration management for textwatch.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! application data directory (see [`DataStorage`]). Each module is optional
//! and omitted from the file until configured:
//!
//! - **Watch Config**: weather refresh interval, date line length, mailbox size
//! - **Weather Config**: the reading the companion reports
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use textwatch::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let watch = config.watch.unwrap_or_default();
//! println!("refresh every {} minutes", watch.refresh_interval);
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::channel::DEFAULT_CAPACITY;
use crate::libs::date::DATE_LIMIT;
use crate::libs::messages::Message;
use crate::libs::schedule::DEFAULT_REFRESH_INTERVAL;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Watch face behaviour.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WatchConfig {
    /// Minutes between weather refreshes, aligned to the hour.
    ///
    /// Must divide 60; other values fall back to 30 at runtime.
    pub refresh_interval: u32,

    /// Maximum number of characters of the date line.
    pub date_limit: usize,

    /// Number of messages each side of the companion link can queue.
    pub mailbox_capacity: usize,
}

/// The reading the companion answers fetch requests with.
///
/// Without a temperature the companion reports the location as unavailable
/// and the face keeps showing its last reading.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct WeatherConfig {
    /// Temperature in degrees Celsius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// City reported alongside the temperature.
    #[serde(default)]
    pub city: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch: Option<WatchConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherConfig>,
}

impl Default for WatchConfig {
    /// Refresh at :00 and :30, 32 character date line, 8 queued messages.
    fn default() -> Self {
        WatchConfig {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            date_limit: DATE_LIMIT,
            mailbox_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl WatchConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "watch".to_string(),
            name: Message::ConfigModuleWatch.to_string(),
        }
    }

    /// Prompts for every field, offering the current values as defaults.
    pub fn init(current: &Option<WatchConfig>) -> Result<Self> {
        let current = current.clone().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let refresh_interval = Input::<u32>::with_theme(&theme)
            .with_prompt(Message::PromptRefreshInterval.to_string())
            .default(current.refresh_interval)
            .validate_with(|value: &u32| -> Result<(), String> {
                if *value > 0 && 60 % *value == 0 {
                    Ok(())
                } else {
                    Err(Message::PromptRefreshInterval.to_string())
                }
            })
            .interact_text()?;

        let date_limit = Input::<usize>::with_theme(&theme)
            .with_prompt(Message::PromptDateLimit.to_string())
            .default(current.date_limit)
            .interact_text()?;

        Ok(WatchConfig {
            refresh_interval,
            date_limit,
            mailbox_capacity: current.mailbox_capacity,
        })
    }
}

impl WeatherConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "weather".to_string(),
            name: Message::ConfigModuleWeather.to_string(),
        }
    }

    pub fn init(current: &Option<WeatherConfig>) -> Result<Self> {
        let current = current.clone().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let city: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptCity.to_string())
            .default(current.city.clone())
            .allow_empty(true)
            .interact_text()?;

        let temperature: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTemperature.to_string())
            .default(current.temperature.map(|t| t.to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(WeatherConfig {
            temperature: parse_temperature(&temperature)?,
            city,
        })
    }
}

/// Parses an optional temperature typed by the user. Blank means none.
pub fn parse_temperature(value: &str) -> Result<Option<f64>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .map(Some)
        .ok_or_else(|| msg_error_anyhow!(Message::InvalidTemperature(value.to_string())))
}

impl Config {
    /// Reads the configuration, or returns the defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard over the selected modules.
    pub fn init() -> Result<Self> {
        let mut config = Config::read()?;
        let modules = [WatchConfig::module(), WeatherConfig::module()];
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectConfigModules.to_string())
            .items(&names)
            .interact()?;

        for index in selected {
            match modules[index].key.as_str() {
                "watch" => config.watch = Some(WatchConfig::init(&config.watch)?),
                "weather" => config.weather = Some(WeatherConfig::init(&config.weather)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
