//! Conversation and message types for MedAssist.
//!
//! These types model a conversation between a user and the assistant:
//! the conversation container, its messages, and the insert payloads the
//! store turns into stored records. Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export MessageRole from llm module (it's used in both chat and llm contexts).
pub use crate::llm::MessageRole;

/// A conversation holding an ordered message history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: i64,
    pub user_id: Option<String>,
    /// Assigned by the store when the conversation is created.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a conversation.
///
/// Unknown fields are ignored; a `userId` that is neither a string nor null
/// fails deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConversation {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// A single turn within a conversation.
///
/// Messages are ordered by `timestamp` within a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub conversation_id: i64,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Always false for stored messages.
    pub is_typing: bool,
}

/// Payload for creating a message. Timestamp and typing flag are set by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub conversation_id: i64,
    pub role: MessageRole,
    pub content: String,
}

/// The pair of messages produced by one user turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageExchange {
    pub user_message: Message,
    pub assistant_message: Message,
}
