//! Chat route for the Jarvis backend
//!
//! Same dispatch table as the on-device session layer; the server only adds
//! input validation and the advisory light state.

use axum::{Json, Router, extract::State, routing::post};
use jarvis::ConversationTurn;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{AppState, error::ApiError};

/// Chat request from the front-end
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Prior turns, accepted for forward compatibility and unused by logic.
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
    pub message: Option<String>,
}

/// Chat response with the reply and any simulated actions
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    pub actions: Vec<String>,
}

pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = request.message.as_deref().map(str::trim).unwrap_or("");
    if message.is_empty() {
        return Err(ApiError::BadRequest(
            "message is required and must be non-empty".to_string(),
        ));
    }

    tracing::info!("Incoming chat message: {:?}", message);

    let result = state.dispatcher().dispatch(&request.history, message);
    state.apply_actions(&result.actions).await;

    Ok(Json(ChatResponse {
        reply: result.reply,
        actions: result.actions,
    }))
}
