//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{DatabasePool, ParticipantRepository};
use crate::utils::errors::ContestError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pool: DatabasePool,
    pub participants: ParticipantRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            participants: ParticipantRepository::new(pool.clone()),
            pool,
        }
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> Result<(), ContestError> {
        super::run_migrations(&self.pool).await
    }

    /// Get system statistics
    pub async fn get_system_stats(&self) -> Result<serde_json::Value, ContestError> {
        let participants = self.participants.count().await?;

        Ok(serde_json::json!({
            "participants": participants
        }))
    }
}
