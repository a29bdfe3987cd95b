//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self { success: true }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Bot whose API calls go to this mock server
    pub fn bot(&self) -> Bot {
        let api_url = url::Url::parse(&self.server.uri()).expect("mock server uri is a valid url");
        Bot::new(test_bot_token()).set_api_url(api_url)
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let response_body = if config.success {
            json!({
                "ok": true,
                "result": {
                    "message_id": 123,
                    "from": {
                        "id": 12345,
                        "is_bot": true,
                        "first_name": "ContestBot",
                        "username": "contest_bot"
                    },
                    "chat": {
                        "id": test_user_id(),
                        "type": "private",
                        "first_name": "Test"
                    },
                    "date": 1640995200,
                    "text": "Test message"
                }
            })
        } else {
            json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: message text is empty"
            })
        };

        let response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(response_body);

        // teloxide and the Bot API docs disagree on method name casing
        Mock::given(method("POST"))
            .and(path_regex(r"(?i)^/bot[^/]+/sendmessage$"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of all sendMessage calls received so far
    pub async fn sent_messages(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|req| req.url.path().to_lowercase().ends_with("/sendmessage"))
            .filter_map(|req| serde_json::from_slice(&req.body).ok())
            .collect()
    }

    /// Text of every sendMessage call received so far
    pub async fn sent_texts(&self) -> Vec<String> {
        self.sent_messages()
            .await
            .into_iter()
            .filter_map(|body| body.get("text").and_then(Value::as_str).map(str::to_string))
            .collect()
    }
}

/// Get test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Get test user ID
pub fn test_user_id() -> i64 {
    987654321
}
