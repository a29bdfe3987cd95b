//! Services module
//!
//! This module contains business logic services

pub mod participant;

// Re-export commonly used services
pub use participant::ParticipantService;

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::database::ParticipantStore;

/// Service factory shared by the bot dispatcher and the web router
#[derive(Clone)]
pub struct ServiceFactory {
    pub participant_service: ParticipantService,
    pub settings: Arc<Settings>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings, store: Arc<dyn ParticipantStore>) -> Self {
        Self {
            participant_service: ParticipantService::new(store),
            settings: Arc::new(settings),
        }
    }
}
