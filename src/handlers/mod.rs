//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Message handlers for Mini App data and other messages

pub mod commands;
pub mod messages;

// Re-export commonly used handler functions
pub use commands::*;
pub use messages::*;
