//! In-memory storage implementation.
//!
//! Implements `Storage` from `medassist-core` with one `DashMap` per entity
//! kind and one atomic id counter per kind. Values are cloned out of the maps
//! so no `DashMap` guard outlives a call. Nothing survives a restart.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use dashmap::DashMap;
use medassist_core::repository::storage::Storage;
use medassist_types::chat::{Conversation, Message, NewConversation, NewMessage};
use medassist_types::error::RepositoryError;
use medassist_types::user::{NewUser, User};

/// Process-lifetime storage for users, conversations, and messages.
///
/// Ids start at 1 and are taken with `fetch_add`, so they stay unique and
/// increasing under parallel callers and are never handed out twice.
pub struct MemStorage {
    users: DashMap<i64, User>,
    conversations: DashMap<i64, Conversation>,
    messages: DashMap<i64, Message>,
    next_user_id: AtomicI64,
    next_conversation_id: AtomicI64,
    next_message_id: AtomicI64,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            conversations: DashMap::new(),
            messages: DashMap::new(),
            next_user_id: AtomicI64::new(1),
            next_conversation_id: AtomicI64::new(1),
            next_message_id: AtomicI64::new(1),
        }
    }

    /// Number of stored messages across all conversations.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn next_id(counter: &AtomicI64) -> i64 {
    counter.fetch_add(1, Ordering::Relaxed)
}

impl Storage for MemStorage {
    async fn get_user(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.get(&id).map(|r| r.value().clone()))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .iter()
            .filter(|r| r.value().username == username)
            .map(|r| r.value().clone())
            .min_by_key(|u| u.id))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, RepositoryError> {
        let user = User {
            id: next_id(&self.next_user_id),
            username: user.username,
            password: user.password,
        };
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn create_conversation(
        &self,
        conversation: NewConversation,
    ) -> Result<Conversation, RepositoryError> {
        let conversation = Conversation {
            id: next_id(&self.next_conversation_id),
            user_id: conversation.user_id,
            created_at: Utc::now(),
        };
        self.conversations
            .insert(conversation.id, conversation.clone());
        Ok(conversation)
    }

    async fn get_conversation(&self, id: i64) -> Result<Option<Conversation>, RepositoryError> {
        Ok(self.conversations.get(&id).map(|r| r.value().clone()))
    }

    async fn get_conversations_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Conversation>, RepositoryError> {
        let mut conversations: Vec<Conversation> = self
            .conversations
            .iter()
            .filter(|r| r.value().user_id.as_deref() == Some(user_id))
            .map(|r| r.value().clone())
            .collect();
        conversations.sort_by_key(|c| c.id);
        Ok(conversations)
    }

    async fn create_message(&self, message: NewMessage) -> Result<Message, RepositoryError> {
        let message = Message {
            id: next_id(&self.next_message_id),
            conversation_id: message.conversation_id,
            role: message.role,
            content: message.content,
            timestamp: Utc::now(),
            is_typing: false,
        };
        self.messages.insert(message.id, message.clone());
        Ok(message)
    }

    async fn get_messages_by_conversation(
        &self,
        conversation_id: i64,
    ) -> Result<Vec<Message>, RepositoryError> {
        let mut messages: Vec<Message> = self
            .messages
            .iter()
            .filter(|r| r.value().conversation_id == conversation_id)
            .map(|r| r.value().clone())
            .collect();
        // Same-tick timestamps keep insertion order.
        messages.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));
        Ok(messages)
    }

    async fn delete_message(&self, id: i64) -> Result<(), RepositoryError> {
        self.messages.remove(&id);
        Ok(())
    }
}
