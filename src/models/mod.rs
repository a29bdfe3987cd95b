//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod participant;

// Re-export commonly used models
pub use participant::{Participant, UpsertParticipantRequest, resolve_extra_data};
