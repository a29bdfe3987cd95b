//! In-memory participant stores
//!
//! Stand-ins for the Postgres repository so the service, bot handlers and web
//! router can be exercised without a database.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use contest_bot::database::ParticipantStore;
use contest_bot::models::participant::{resolve_extra_data, Participant, UpsertParticipantRequest};
use contest_bot::utils::errors::{ContestError, Result};

/// Participant store keeping rows in a map keyed by Telegram user id
#[derive(Default)]
pub struct InMemoryParticipantStore {
    rows: Mutex<HashMap<i64, Participant>>,
}

impl InMemoryParticipantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, telegram_user_id: i64) -> Option<Participant> {
        self.rows.lock().unwrap().get(&telegram_user_id).cloned()
    }
}

#[async_trait]
impl ParticipantStore for InMemoryParticipantStore {
    async fn upsert_participant(&self, request: UpsertParticipantRequest) -> Result<Participant> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let next_id = rows.len() as i64 + 1;

        let participant = match rows.get(&request.telegram_user_id) {
            Some(existing) => Participant {
                username: request.username.clone(),
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                language_code: request.language_code.clone(),
                is_premium: request.is_premium,
                extra_data: resolve_extra_data(&existing.extra_data, request.extra_data.as_ref()),
                updated_at: now,
                ..existing.clone()
            },
            None => Participant {
                id: next_id,
                telegram_user_id: request.telegram_user_id,
                username: request.username.clone(),
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                language_code: request.language_code.clone(),
                is_premium: request.is_premium,
                extra_data: request.extra_data_or_empty(),
                created_at: now,
                updated_at: now,
            },
        };

        rows.insert(request.telegram_user_id, participant.clone());
        Ok(participant)
    }

    async fn find_by_telegram_user_id(&self, telegram_user_id: i64) -> Result<Option<Participant>> {
        Ok(self.get(telegram_user_id))
    }
}

/// Participant store whose every call fails like a lost database connection
pub struct FailingParticipantStore;

#[async_trait]
impl ParticipantStore for FailingParticipantStore {
    async fn upsert_participant(&self, _request: UpsertParticipantRequest) -> Result<Participant> {
        Err(ContestError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_telegram_user_id(&self, _telegram_user_id: i64) -> Result<Option<Participant>> {
        Err(ContestError::Database(sqlx::Error::PoolTimedOut))
    }
}
