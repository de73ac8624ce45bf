use thiserror::Error;

/// Errors from repository operations (used by trait definitions in medassist-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),
}

/// User-facing failure of the assistant gateway.
///
/// The underlying provider error is logged, never carried here.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("I'm currently experiencing technical difficulties. Please try again in a moment.")]
    Unavailable,
}

/// Errors from the chat service.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("conversation not found")]
    ConversationNotFound,

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),
}
