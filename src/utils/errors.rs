//! Error handling for ContestBot
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for ContestBot application
#[derive(Error, Debug)]
pub enum ContestError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Unable to identify the submitting user")]
    MissingIdentity,
}

/// Result type alias for ContestBot operations
pub type Result<T> = std::result::Result<T, ContestError>;

impl ContestError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            ContestError::Database(_) => false,
            ContestError::Migration(_) => false,
            ContestError::Telegram(_) => true,
            ContestError::Config(_) => false,
            ContestError::ConfigLoad(_) => false,
            ContestError::Io(_) => true,
            ContestError::UrlParse(_) => false,
            ContestError::MissingIdentity => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContestError::Database(_) => ErrorSeverity::Critical,
            ContestError::Migration(_) => ErrorSeverity::Critical,
            ContestError::Config(_) => ErrorSeverity::Critical,
            ContestError::ConfigLoad(_) => ErrorSeverity::Critical,
            ContestError::MissingIdentity => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
