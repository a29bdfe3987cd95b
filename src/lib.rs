//! ContestBot
//!
//! A Telegram bot and Mini App for registering contest participants.
//! Both the chat front end and the web front end submit to a single
//! participation service, which upserts one participant row per Telegram user.

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod database;
pub mod utils;
pub mod web;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ContestError, Result};

// Re-export main components for easy access
pub use database::{DatabaseService, ParticipantStore};
pub use services::{ParticipantService, ServiceFactory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
