//! Storage trait definition.
//!
//! CRUD over the three entity kinds: users, conversations, and messages.

use medassist_types::chat::{Conversation, Message, NewConversation, NewMessage};
use medassist_types::error::RepositoryError;
use medassist_types::user::{NewUser, User};

/// Repository trait for users, conversations, and messages.
///
/// Implementations assign ids and timestamps; callers never supply them.
/// Ids are unique per entity kind and never reused. No operation checks
/// that a referenced conversation or user exists.
///
/// Implementations live in medassist-infra (e.g., `MemStorage`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait Storage: Send + Sync {
    /// Get a user by id.
    fn get_user(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Get the first user (lowest id) with the given username.
    fn get_user_by_username(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Store a new user under the next user id.
    fn create_user(
        &self,
        user: NewUser,
    ) -> impl std::future::Future<Output = Result<User, RepositoryError>> + Send;

    /// Store a new conversation under the next conversation id, stamped with the current time.
    fn create_conversation(
        &self,
        conversation: NewConversation,
    ) -> impl std::future::Future<Output = Result<Conversation, RepositoryError>> + Send;

    /// Get a conversation by id.
    fn get_conversation(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Conversation>, RepositoryError>> + Send;

    /// All conversations whose `user_id` equals `user_id`, in id order.
    fn get_conversations_by_user(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Conversation>, RepositoryError>> + Send;

    /// Store a new message under the next message id.
    ///
    /// The timestamp is the current time and `is_typing` is always false.
    fn create_message(
        &self,
        message: NewMessage,
    ) -> impl std::future::Future<Output = Result<Message, RepositoryError>> + Send;

    /// Messages of a conversation, ordered by timestamp ASC (ties in id order).
    fn get_messages_by_conversation(
        &self,
        conversation_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;

    /// Delete a message. No-op if the id does not exist.
    fn delete_message(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
