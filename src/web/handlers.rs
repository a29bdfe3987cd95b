//! HTTP handlers
//!
//! GET /health, GET / and POST /participate.

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::participant::UpsertParticipantRequest;
use crate::services::ServiceFactory;
use crate::utils::logging;
use crate::web::error::WebError;

const INDEX_HTML: &str = include_str!("templates/index.html");

pub const WEB_FALLBACK_SOURCE: &str = "web_fallback";
pub const PARTICIPATION_ACCEPTED: &str = "Participation accepted";

/// Body of POST /participate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipateRequest {
    pub telegram_user_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipateResponse {
    pub success: bool,
    pub message: String,
    pub participant_id: i64,
}

impl ParticipateRequest {
    /// Web submissions carry no locale or premium flag and are tagged with their source
    pub fn into_upsert_request(self) -> UpsertParticipantRequest {
        let mut extra_data = Map::new();
        extra_data.insert("source".to_string(), Value::String(WEB_FALLBACK_SOURCE.to_string()));

        UpsertParticipantRequest {
            telegram_user_id: self.telegram_user_id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            language_code: None,
            is_premium: None,
            extra_data: Some(extra_data),
        }
    }
}

/// GET /health
pub async fn health() -> &'static str {
    "OK"
}

/// GET / - Mini App landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /participate
pub async fn participate(
    State(services): State<ServiceFactory>,
    Json(body): Json<ParticipateRequest>,
) -> Result<Json<ParticipateResponse>, WebError> {
    logging::log_submission_received("web", body.telegram_user_id);

    let participant = services
        .participant_service
        .submit_participation(body.into_upsert_request())
        .await?;

    Ok(Json(ParticipateResponse {
        success: true,
        message: PARTICIPATION_ACCEPTED.to_string(),
        participant_id: participant.id,
    }))
}
