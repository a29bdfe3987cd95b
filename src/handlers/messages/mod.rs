//! Message handlers module
//!
//! Handles data submitted from the contest Mini App and ignores everything else

use teloxide::{Bot, types::{Message, User}, prelude::*};
use tracing::{debug, warn};
use serde_json::{Map, Value};
use crate::utils::errors::{ContestError, Result};
use crate::utils::{helpers, logging};
use crate::services::ServiceFactory;
use crate::models::participant::UpsertParticipantRequest;

pub const REGISTERED_TEXT: &str = "You are registered as a participant! Good luck in the contest.";
pub const UNKNOWN_USER_TEXT: &str = "Could not identify the user.";
pub const REGISTRATION_FAILED_TEXT: &str = "Registration failed. Please try again later.";

/// Handle a message carrying Mini App data
pub async fn handle_web_app_data(
    bot: Bot,
    msg: Message,
    services: ServiceFactory,
) -> Result<()> {
    let Some(web_app_data) = msg.web_app_data() else {
        return Ok(());
    };
    let payload = helpers::parse_web_app_payload(&web_app_data.data);

    let request = match participation_request(msg.from.as_ref(), payload) {
        Ok(request) => request,
        Err(e) => {
            logging::log_handler_error("web_app_data", &e);
            bot.send_message(msg.chat.id, UNKNOWN_USER_TEXT).await?;
            return Ok(());
        }
    };

    logging::log_submission_received("telegram", request.telegram_user_id);

    let reply = match services.participant_service.submit_participation(request).await {
        Ok(_) => REGISTERED_TEXT,
        Err(e) => {
            logging::log_handler_error("web_app_data", &e);
            REGISTRATION_FAILED_TEXT
        }
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

/// Build the submission for the sender of a Mini App message
pub fn participation_request(
    user: Option<&User>,
    payload: Map<String, Value>,
) -> Result<UpsertParticipantRequest> {
    let user = user.ok_or(ContestError::MissingIdentity)?;

    Ok(UpsertParticipantRequest {
        telegram_user_id: user.id.0 as i64,
        username: user.username.clone(),
        first_name: Some(user.first_name.clone()),
        last_name: user.last_name.clone(),
        language_code: user.language_code.clone(),
        // Telegram omits the flag for non-premium users, so only `true` is known
        is_premium: user.is_premium.then_some(true),
        extra_data: Some(payload),
    })
}

/// Handle any other message
pub async fn handle_other_message(msg: Message) -> Result<()> {
    match msg.from.as_ref() {
        Some(user) => debug!(user_id = user.id.0, chat_id = ?msg.chat.id, "Ignoring message without Mini App data"),
        None => warn!(chat_id = ?msg.chat.id, "Ignoring message without sender"),
    }
    Ok(())
}
