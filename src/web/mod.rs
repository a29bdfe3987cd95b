//! Web front end
//!
//! Serves the Mini App landing page and accepts participation submissions
//! from browsers outside Telegram.

pub mod error;
pub mod handlers;
pub mod router;

pub use error::WebError;
pub use router::{bind, build_router, serve};
