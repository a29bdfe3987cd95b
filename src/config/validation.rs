//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{ContestError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_features_config(&settings.features)?;
    if settings.features.bot_enabled {
        validate_bot_config(&settings.bot)?;
    }
    validate_database_config(&settings.database)?;
    if settings.features.web_enabled {
        validate_web_config(&settings.web)?;
    }
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(ContestError::Config(
            "Bot token is required".to_string()
        ));
    }

    url::Url::parse(&config.webapp_url).map_err(|e| {
        ContestError::Config(format!("Invalid webapp URL {}: {}", config.webapp_url, e))
    })?;

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(ContestError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(ContestError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(ContestError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    Ok(())
}

/// Validate web server configuration
fn validate_web_config(config: &super::WebConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(ContestError::Config(
            "Web host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(ContestError::Config(
            "Web port must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ContestError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.to_lowercase().as_str()) {
        return Err(ContestError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

fn validate_features_config(config: &super::FeaturesConfig) -> Result<()> {
    if !config.bot_enabled && !config.web_enabled {
        return Err(ContestError::Config(
            "At least one of the bot or web front ends must be enabled".to_string()
        ));
    }

    Ok(())
}
