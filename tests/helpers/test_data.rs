//! Builders for Telegram updates and service fixtures

use std::sync::Arc;

use contest_bot::config::Settings;
use contest_bot::database::ParticipantStore;
use contest_bot::services::ServiceFactory;
use serde_json::{json, Value};
use teloxide::types::Message;

fn user_json(user_id: i64, username: Option<&str>, first_name: &str) -> Value {
    let mut user = json!({
        "id": user_id,
        "is_bot": false,
        "first_name": first_name,
        "language_code": "en"
    });
    if let Some(username) = username {
        user["username"] = json!(username);
    }
    user
}

fn private_chat_json(chat_id: i64, first_name: &str) -> Value {
    json!({
        "id": chat_id,
        "type": "private",
        "first_name": first_name
    })
}

/// A text message from a user in their private chat with the bot
pub fn create_text_message(user_id: i64, text: &str) -> Message {
    serde_json::from_value(json!({
        "message_id": 1,
        "date": 1640995200,
        "chat": private_chat_json(user_id, "Test"),
        "from": user_json(user_id, Some("testuser"), "Test"),
        "text": text
    }))
    .expect("valid text message")
}

/// A message carrying data sent from the Mini App
pub fn create_web_app_data_message(user_id: i64, username: Option<&str>, data: &str) -> Message {
    serde_json::from_value(json!({
        "message_id": 2,
        "date": 1640995200,
        "chat": private_chat_json(user_id, "Test"),
        "from": user_json(user_id, username, "Test"),
        "web_app_data": {
            "data": data,
            "button_text": "Open Mini App"
        }
    }))
    .expect("valid web app data message")
}

/// A Mini App message that arrives without a sender
pub fn create_anonymous_web_app_data_message(chat_id: i64, data: &str) -> Message {
    serde_json::from_value(json!({
        "message_id": 3,
        "date": 1640995200,
        "chat": private_chat_json(chat_id, "Test"),
        "web_app_data": {
            "data": data,
            "button_text": "Open Mini App"
        }
    }))
    .expect("valid web app data message")
}

/// Settings suitable for tests
pub fn test_settings(webapp_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.bot.token = "12345:test_token".to_string();
    settings.bot.webapp_url = webapp_url.to_string();
    settings
}

pub fn test_services(settings: Settings, store: Arc<dyn ParticipantStore>) -> ServiceFactory {
    ServiceFactory::new(settings, store)
}
