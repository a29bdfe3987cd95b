//! Participation service implementation
//!
//! Registers or updates a participant for a given Telegram identity. The
//! service adds no rules of its own; it forwards submissions to the store.

use std::sync::Arc;

use crate::database::ParticipantStore;
use crate::models::participant::{Participant, UpsertParticipantRequest};
use crate::utils::errors::Result;
use crate::utils::logging;

/// Participation service
#[derive(Clone)]
pub struct ParticipantService {
    store: Arc<dyn ParticipantStore>,
}

impl ParticipantService {
    /// Create a new ParticipantService instance
    pub fn new(store: Arc<dyn ParticipantStore>) -> Self {
        Self { store }
    }

    /// Submit a participation, creating or updating the participant row
    pub async fn submit_participation(&self, request: UpsertParticipantRequest) -> Result<Participant> {
        let telegram_user_id = request.telegram_user_id;
        logging::log_upsert_attempt(telegram_user_id, request.has_extra_data());

        let result = self.store.upsert_participant(request).await;
        logging::log_upsert_result(telegram_user_id, &result);

        result
    }

    /// Get participant by Telegram user ID
    pub async fn get_participant(&self, telegram_user_id: i64) -> Result<Option<Participant>> {
        self.store.find_by_telegram_user_id(telegram_user_id).await
    }
}
