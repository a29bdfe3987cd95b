//! Help command handler

use teloxide::{Bot, types::Message, prelude::*};
use crate::utils::errors::Result;

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message) -> Result<()> {
    let help_text = "🎉 Contest Bot Help\n\n\
        /start - Open the contest registration\n\
        /help - Show this help message\n\n\
        Submitting the form again only updates your registration.";

    bot.send_message(msg.chat.id, help_text).await?;
    Ok(())
}
