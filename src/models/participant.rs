//! Participant model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

/// A contest participant, one row per Telegram user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Participant {
    pub id: i64,
    pub telegram_user_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub language_code: Option<String>,
    pub is_premium: Option<bool>,
    pub extra_data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields submitted for a participant.
///
/// Every field except `extra_data` replaces the stored value, `None`
/// included. `extra_data` only replaces the stored payload when non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertParticipantRequest {
    pub telegram_user_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub language_code: Option<String>,
    pub is_premium: Option<bool>,
    pub extra_data: Option<Map<String, Value>>,
}

impl UpsertParticipantRequest {
    pub fn new(telegram_user_id: i64) -> Self {
        Self {
            telegram_user_id,
            ..Default::default()
        }
    }

    /// Payload to store on first insert: never null, `{}` when nothing was supplied
    pub fn extra_data_or_empty(&self) -> Value {
        Value::Object(self.extra_data.clone().unwrap_or_default())
    }

    /// Whether the request carries a payload that may replace a stored one
    pub fn has_extra_data(&self) -> bool {
        self.extra_data.as_ref().is_some_and(|data| !data.is_empty())
    }
}

/// Decide the payload kept after an update.
///
/// A non-empty supplied payload wins, otherwise the stored one is kept.
pub fn resolve_extra_data(existing: &Value, supplied: Option<&Map<String, Value>>) -> Value {
    match supplied {
        Some(data) if !data.is_empty() => Value::Object(data.clone()),
        _ => existing.clone(),
    }
}
