//! Participant storage seam
//!
//! The participation service talks to storage only through this trait, so the
//! Postgres repository can be replaced (an in-memory store in tests).

use async_trait::async_trait;

use crate::models::participant::{Participant, UpsertParticipantRequest};
use crate::utils::errors::Result;

#[async_trait]
pub trait ParticipantStore: Send + Sync {
    /// Insert the participant or update the existing row for the same Telegram user
    async fn upsert_participant(&self, request: UpsertParticipantRequest) -> Result<Participant>;

    async fn find_by_telegram_user_id(&self, telegram_user_id: i64) -> Result<Option<Participant>>;
}
