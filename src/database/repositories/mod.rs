//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod participant;

// Re-export repositories
pub use participant::ParticipantRepository;
