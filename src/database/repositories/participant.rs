//! Participant repository implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::store::ParticipantStore;
use crate::models::participant::{Participant, UpsertParticipantRequest};
use crate::utils::errors::ContestError;

#[derive(Clone)]
#[derive(Debug)]
pub struct ParticipantRepository {
    pool: PgPool,
}

impl ParticipantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert or update a participant keyed on the Telegram user id.
    ///
    /// Runs as a single `INSERT .. ON CONFLICT DO UPDATE` inside its own
    /// transaction. Concurrent submissions for one user converge on one row
    /// and the last commit wins. Scalar fields are overwritten as supplied;
    /// `extra_data` is only overwritten by a non-empty object. Timestamps come
    /// from the database clock; `created_at` is never touched by the update
    /// branch.
    pub async fn upsert_participant(&self, request: UpsertParticipantRequest) -> Result<Participant, ContestError> {
        let extra_data = request.extra_data_or_empty();

        // Rolled back on drop if anything below fails
        let mut tx = self.pool.begin().await?;

        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (telegram_user_id, username, first_name, last_name, language_code, is_premium, extra_data, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
            ON CONFLICT (telegram_user_id)
            DO UPDATE SET
                username = EXCLUDED.username,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                language_code = EXCLUDED.language_code,
                is_premium = EXCLUDED.is_premium,
                extra_data = CASE
                    WHEN EXCLUDED.extra_data = '{}'::jsonb THEN participants.extra_data
                    ELSE EXCLUDED.extra_data
                END,
                updated_at = NOW()
            RETURNING id, telegram_user_id, username, first_name, last_name, language_code, is_premium, extra_data, created_at, updated_at
            "#
        )
        .bind(request.telegram_user_id)
        .bind(request.username)
        .bind(request.first_name)
        .bind(request.last_name)
        .bind(request.language_code)
        .bind(request.is_premium)
        .bind(extra_data)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(participant)
    }

    /// Find participant by Telegram user ID
    pub async fn find_by_telegram_user_id(&self, telegram_user_id: i64) -> Result<Option<Participant>, ContestError> {
        let participant = sqlx::query_as::<_, Participant>(
            "SELECT id, telegram_user_id, username, first_name, last_name, language_code, is_premium, extra_data, created_at, updated_at FROM participants WHERE telegram_user_id = $1"
        )
        .bind(telegram_user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(participant)
    }

    /// Count total participants
    pub async fn count(&self) -> Result<i64, ContestError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM participants")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

#[async_trait]
impl ParticipantStore for ParticipantRepository {
    async fn upsert_participant(&self, request: UpsertParticipantRequest) -> Result<Participant, ContestError> {
        ParticipantRepository::upsert_participant(self, request).await
    }

    async fn find_by_telegram_user_id(&self, telegram_user_id: i64) -> Result<Option<Participant>, ContestError> {
        ParticipantRepository::find_by_telegram_user_id(self, telegram_user_id).await
    }
}
