//! Web error type mapping to HTTP status codes

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::utils::errors::ContestError;
use crate::utils::logging;

pub const REGISTRATION_FAILED_DETAIL: &str = "Failed to register participant";

/// Web-level error that maps to HTTP responses.
///
/// Storage errors are logged and replaced by a generic detail; the
/// underlying error never reaches the client.
#[derive(Debug)]
pub enum WebError {
    /// Generic internal error.
    Internal(String),
}

impl From<ContestError> for WebError {
    fn from(e: ContestError) -> Self {
        logging::log_handler_error("participate", &e);
        WebError::Internal(REGISTRATION_FAILED_DETAIL.to_string())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            WebError::Internal(detail) => (StatusCode::INTERNAL_SERVER_ERROR, detail),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
