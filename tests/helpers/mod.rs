//! Test helpers module
//!
//! This module provides utilities and helpers for testing the contest bot.
//! It includes a mock Telegram server, database helpers, in-memory stores
//! and builders for Telegram updates.

#![allow(dead_code)]

pub mod database_helper;
pub mod memory_store;
pub mod telegram_mock;
pub mod test_data;

pub use database_helper::*;
pub use memory_store::*;
pub use telegram_mock::*;
pub use test_data::*;
