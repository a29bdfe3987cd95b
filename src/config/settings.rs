//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use crate::utils::errors::ContestError;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub features: FeaturesConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    #[serde(default)]
    pub token: String,
    /// Public URL of the Mini App landing page
    pub webapp_url: String,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// HTTP front end configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the rolling log file; stdout only when absent
    pub file_path: Option<String>,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    pub bot_enabled: bool,
    pub web_enabled: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: "static".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
        }
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            bot_enabled: true,
            web_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, ContestError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("CONTEST")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), ContestError> {
        super::validation::validate_settings(self)
    }

    /// Whether the Mini App URL can be opened as a native Telegram web app
    pub fn webapp_is_secure(&self) -> bool {
        url::Url::parse(&self.bot.webapp_url)
            .map(|url| url.scheme() == "https")
            .unwrap_or(false)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                webapp_url: "https://localhost:8000/".to_string(),
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/contest".to_string(),
                max_connections: default_max_connections(),
                min_connections: default_min_connections(),
            },
            web: WebConfig::default(),
            logging: LoggingConfig::default(),
            features: FeaturesConfig::default(),
        }
    }
}
