//! Quick action HTTP handler.
//!
//! POST /api/quick-actions - Answer a canned health topic.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::http::error::AppError;
use crate::http::extractors::body::JsonBody;
use crate::state::AppState;

/// Response body for a quick action.
#[derive(Debug, Serialize)]
pub struct QuickActionResponse {
    pub content: String,
}

/// POST /api/quick-actions - Body: `{"action": "<key>"}`.
///
/// Unknown keys are answered with the `symptoms` topic.
pub async fn quick_action(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<Json<QuickActionResponse>, AppError> {
    let action = body
        .str_field("action")
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::Validation("Action is required".to_string()))?;

    match state.chat_service.quick_action(action).await {
        Ok(content) => Ok(Json(QuickActionResponse { content })),
        Err(e) => {
            tracing::error!(action, error = %e, "Error in quick action endpoint");
            Err(AppError::Internal(e.to_string()))
        }
    }
}
