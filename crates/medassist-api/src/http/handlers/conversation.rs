//! Conversation HTTP handlers.
//!
//! Endpoints:
//! - POST /api/conversations      - Create a conversation
//! - GET  /api/conversations/{id} - Get a single conversation

use axum::extract::{Path, State};
use axum::Json;

use medassist_types::chat::{Conversation, NewConversation};

use super::parse_id;
use crate::http::error::AppError;
use crate::http::extractors::body::JsonBody;
use crate::state::AppState;

const INVALID_CONVERSATION: &str = "Invalid conversation data";
const CONVERSATION_NOT_FOUND: &str = "Conversation not found";

/// POST /api/conversations - Create a conversation.
///
/// Any failure, including a storage error, is reported as invalid input.
pub async fn create_conversation(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<Json<Conversation>, AppError> {
    let invalid = || AppError::Validation(INVALID_CONVERSATION.to_string());

    let value = body.0.filter(|v| v.is_object()).ok_or_else(invalid)?;
    let new_conversation: NewConversation = serde_json::from_value(value).map_err(|e| {
        tracing::debug!(error = %e, "Rejected conversation payload");
        invalid()
    })?;

    let conversation = state
        .chat_service
        .create_conversation(new_conversation)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Failed to create conversation");
            invalid()
        })?;

    Ok(Json(conversation))
}

/// GET /api/conversations/{id} - Get a conversation by ID.
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Conversation>, AppError> {
    let not_found = || AppError::NotFound(CONVERSATION_NOT_FOUND.to_string());

    let id = parse_id(&id).ok_or_else(not_found)?;

    state
        .chat_service
        .get_conversation(id)
        .await
        .map_err(|e| {
            tracing::error!(conversation_id = id, error = %e, "Failed to fetch conversation");
            AppError::Internal("Failed to fetch conversation".to_string())
        })?
        .map(Json)
        .ok_or_else(not_found)
}
