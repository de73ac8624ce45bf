//! Message HTTP handlers.
//!
//! Endpoints:
//! - GET  /api/conversations/{id}/messages - List messages in timestamp order
//! - POST /api/conversations/{id}/messages - Send a message and get the assistant reply

use axum::extract::{Path, State};
use axum::Json;

use medassist_types::chat::{Message, MessageExchange};
use medassist_types::error::ChatError;

use super::parse_id;
use crate::http::error::AppError;
use crate::http::extractors::body::JsonBody;
use crate::state::AppState;

/// GET /api/conversations/{id}/messages - Get messages for a conversation.
///
/// A non-numeric id matches no conversation and yields an empty list.
pub async fn list_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Message>>, AppError> {
    let Some(id) = parse_id(&id) else {
        return Ok(Json(Vec::new()));
    };

    let messages = state.chat_service.get_messages(id).await.map_err(|e| {
        tracing::error!(conversation_id = id, error = %e, "Failed to fetch messages");
        AppError::Internal("Failed to fetch messages".to_string())
    })?;

    Ok(Json(messages))
}

/// POST /api/conversations/{id}/messages - Store a user message and the assistant reply.
///
/// Body: `{"content": "<non-empty string>"}`. Content is validated before
/// the conversation is looked up.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> Result<Json<MessageExchange>, AppError> {
    let content = body
        .str_field("content")
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::Validation("Message content is required".to_string()))?;

    let not_found = || AppError::NotFound("Conversation not found".to_string());
    let id = parse_id(&id).ok_or_else(not_found)?;

    match state.chat_service.send_message(id, content).await {
        Ok(exchange) => Ok(Json(exchange)),
        Err(ChatError::ConversationNotFound) => Err(not_found()),
        Err(e) => {
            tracing::error!(conversation_id = id, error = %e, "Error in message endpoint");
            Err(AppError::Internal(e.to_string()))
        }
    }
}
