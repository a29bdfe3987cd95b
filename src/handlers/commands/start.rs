//! Start command handler
//!
//! Greets the user and offers a button that opens the contest Mini App

use teloxide::{
    Bot,
    types::{
        ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
        Message, ReplyMarkup, WebAppInfo,
    },
    prelude::*,
};
use tracing::debug;
use url::Url;
use crate::utils::errors::Result;
use crate::services::ServiceFactory;

pub const WELCOME_TEXT: &str = "Hi! Tap the button below to confirm your participation in the contest.";
pub const HTTPS_NOTICE: &str = "\n\nNote: the Mini App requires HTTPS. Admin, please update the webapp URL.";
pub const OPEN_MINI_APP_BUTTON: &str = "Open Mini App";
pub const OPEN_SITE_BUTTON: &str = "Open website (Mini App requires HTTPS)";

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message, services: ServiceFactory) -> Result<()> {
    debug!(chat_id = ?msg.chat.id, "Processing /start command");

    let webapp_url = &services.settings.bot.webapp_url;
    let keyboard = build_start_keyboard(webapp_url)?;

    bot.send_message(msg.chat.id, welcome_text(services.settings.webapp_is_secure()))
        .reply_markup(keyboard)
        .await?;

    Ok(())
}

/// Welcome text, with a notice for the admin when the Mini App cannot open natively
pub fn welcome_text(webapp_is_secure: bool) -> String {
    if webapp_is_secure {
        WELCOME_TEXT.to_string()
    } else {
        format!("{}{}", WELCOME_TEXT, HTTPS_NOTICE)
    }
}

/// Build the start keyboard.
///
/// The Mini App goes on a reply keyboard button: `sendData` only reaches the
/// bot for apps launched from one. Telegram only accepts web app buttons for
/// `https` URLs; anything else gets an inline link button instead.
pub fn build_start_keyboard(webapp_url: &str) -> Result<ReplyMarkup> {
    let url = Url::parse(webapp_url)?;

    if url.scheme() == "https" {
        let button = KeyboardButton::new(OPEN_MINI_APP_BUTTON)
            .request(ButtonRequest::WebApp(WebAppInfo { url }));
        Ok(ReplyMarkup::Keyboard(KeyboardMarkup::new(vec![vec![button]])))
    } else {
        let button = InlineKeyboardButton::url(OPEN_SITE_BUTTON, url);
        Ok(ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup::new(vec![vec![button]])))
    }
}
