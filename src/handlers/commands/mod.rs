//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /help, etc.

pub mod start;
pub mod help;

use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::Result;
use crate::services::ServiceFactory;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Contest bot commands:")]
pub enum Command {
    #[command(description = "Open the contest registration")]
    Start,
    #[command(description = "Show help information")]
    Help,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: ServiceFactory,
) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(bot, msg, services).await,
        Command::Help => help::handle_help(bot, msg).await,
    }
}
