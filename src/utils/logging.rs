//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the ContestBot application.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::models::participant::Participant;
use crate::utils::errors::{ContestError, ErrorSeverity, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer when dropped and must be held
/// for the lifetime of the program.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match &config.file_path {
        Some(path) => {
            let file_appender = tracing_appender::rolling::daily(path, "contest-bot.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.level.to_lowercase()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| ContestError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an incoming registration request at a front end boundary
pub fn log_submission_received(source: &str, telegram_user_id: i64) {
    info!(
        source = source,
        telegram_user_id = telegram_user_id,
        "Participation request received"
    );
}

/// Log an upsert about to be attempted
pub fn log_upsert_attempt(telegram_user_id: i64, has_extra_data: bool) {
    debug!(
        telegram_user_id = telegram_user_id,
        has_extra_data = has_extra_data,
        "Upserting participant"
    );
}

/// Log the outcome of an upsert
pub fn log_upsert_result(telegram_user_id: i64, result: &Result<Participant>) {
    match result {
        Ok(participant) => {
            info!(
                telegram_user_id = telegram_user_id,
                participant_id = participant.id,
                created = participant.created_at == participant.updated_at,
                "Participant upserted"
            );
        }
        Err(e) => {
            error!(
                telegram_user_id = telegram_user_id,
                error = %e,
                "Participant upsert failed"
            );
        }
    }
}

/// Log a handler error at the level matching its severity
pub fn log_handler_error(context: &str, error: &ContestError) {
    match error.severity() {
        ErrorSeverity::Warning => warn!(context = context, error = %error, "Handler error"),
        ErrorSeverity::Error | ErrorSeverity::Critical => error!(
            context = context,
            error = %error,
            severity = %error.severity(),
            recoverable = error.is_recoverable(),
            "Handler error"
        ),
    }
}
