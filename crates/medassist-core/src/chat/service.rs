//! Chat service orchestrating conversations and message exchanges.
//!
//! ChatService coordinates between a `Storage` implementation and the
//! `AssistantGateway`: creating conversations, reading history, and running
//! one user turn end to end.

use std::sync::Arc;

use medassist_types::chat::{
    Conversation, Message, MessageExchange, MessageRole, NewConversation, NewMessage,
};
use medassist_types::error::{ChatError, RepositoryError};
use medassist_types::llm;
use tracing::{info, warn};

use crate::assistant::gateway::AssistantGateway;
use crate::repository::storage::Storage;

/// Orchestrates conversation reads and the user/assistant exchange.
///
/// Generic over `Storage` so that medassist-core never depends on medassist-infra.
pub struct ChatService<S: Storage> {
    storage: S,
    gateway: Arc<AssistantGateway>,
}

impl<S: Storage> ChatService<S> {
    /// Create a new chat service from a storage backend and a gateway.
    pub fn new(storage: S, gateway: Arc<AssistantGateway>) -> Self {
        Self { storage, gateway }
    }

    /// Access the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Access the assistant gateway.
    pub fn gateway(&self) -> &AssistantGateway {
        &self.gateway
    }

    pub async fn create_conversation(
        &self,
        conversation: NewConversation,
    ) -> Result<Conversation, RepositoryError> {
        let conversation = self.storage.create_conversation(conversation).await?;
        info!(conversation_id = conversation.id, "Conversation created");
        Ok(conversation)
    }

    pub async fn get_conversation(&self, id: i64) -> Result<Option<Conversation>, RepositoryError> {
        self.storage.get_conversation(id).await
    }

    /// Messages of a conversation in timestamp order.
    pub async fn get_messages(&self, conversation_id: i64) -> Result<Vec<Message>, RepositoryError> {
        self.storage.get_messages_by_conversation(conversation_id).await
    }

    /// Run one user turn: store the user message, ask the assistant, store the reply.
    ///
    /// `content` is trimmed before it is stored and sent. Fails with
    /// `ConversationNotFound` (storing nothing) if the conversation does not
    /// exist. If the assistant fails, the user message stays stored.
    pub async fn send_message(
        &self,
        conversation_id: i64,
        content: &str,
    ) -> Result<MessageExchange, ChatError> {
        if self.storage.get_conversation(conversation_id).await?.is_none() {
            warn!(conversation_id, "Message posted to non-existent conversation");
            return Err(ChatError::ConversationNotFound);
        }

        let content = content.trim();
        let user_message = self
            .storage
            .create_message(NewMessage {
                conversation_id,
                role: MessageRole::User,
                content: content.to_string(),
            })
            .await?;

        let mut history: Vec<llm::Message> = self
            .storage
            .get_messages_by_conversation(conversation_id)
            .await?
            .into_iter()
            .filter(|m| m.id != user_message.id)
            .map(|m| llm::Message {
                role: m.role,
                content: m.content,
            })
            .collect();
        history.push(llm::Message::user(content));

        let reply = self.gateway.medical_response(&history).await?;

        let assistant_message = self
            .storage
            .create_message(NewMessage {
                conversation_id,
                role: MessageRole::Assistant,
                content: reply,
            })
            .await?;

        info!(
            conversation_id,
            user_message_id = user_message.id,
            assistant_message_id = assistant_message.id,
            history_len = history.len(),
            "Message exchange completed"
        );

        Ok(MessageExchange {
            user_message,
            assistant_message,
        })
    }

    /// Answer a quick-action key.
    pub async fn quick_action(&self, action: &str) -> Result<String, ChatError> {
        Ok(self.gateway.quick_action_response(action).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::Utc;
    use medassist_types::config::AssistantConfig;
    use medassist_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};
    use medassist_types::user::{NewUser, User};

    use super::*;
    use crate::llm::box_provider::BoxLlmProvider;
    use crate::llm::provider::LlmProvider;

    // --- Minimal storage used only by these tests ---

    #[derive(Default)]
    struct VecStorage {
        conversations: Mutex<Vec<Conversation>>,
        messages: Mutex<Vec<Message>>,
    }

    impl Storage for VecStorage {
        async fn get_user(&self, _id: i64) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn get_user_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn create_user(&self, _user: NewUser) -> Result<User, RepositoryError> {
            Err(RepositoryError::Query("users unsupported".to_string()))
        }

        async fn create_conversation(
            &self,
            conversation: NewConversation,
        ) -> Result<Conversation, RepositoryError> {
            let mut conversations = self.conversations.lock().unwrap();
            let created = Conversation {
                id: conversations.len() as i64 + 1,
                user_id: conversation.user_id,
                created_at: Utc::now(),
            };
            conversations.push(created.clone());
            Ok(created)
        }

        async fn get_conversation(&self, id: i64) -> Result<Option<Conversation>, RepositoryError> {
            let conversations = self.conversations.lock().unwrap();
            Ok(conversations.iter().find(|c| c.id == id).cloned())
        }

        async fn get_conversations_by_user(
            &self,
            _user_id: &str,
        ) -> Result<Vec<Conversation>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn create_message(&self, message: NewMessage) -> Result<Message, RepositoryError> {
            let mut messages = self.messages.lock().unwrap();
            let created = Message {
                id: messages.len() as i64 + 1,
                conversation_id: message.conversation_id,
                role: message.role,
                content: message.content,
                timestamp: Utc::now(),
                is_typing: false,
            };
            messages.push(created.clone());
            Ok(created)
        }

        async fn get_messages_by_conversation(
            &self,
            conversation_id: i64,
        ) -> Result<Vec<Message>, RepositoryError> {
            let messages = self.messages.lock().unwrap();
            Ok(messages
                .iter()
                .filter(|m| m.conversation_id == conversation_id)
                .cloned()
                .collect())
        }

        async fn delete_message(&self, _id: i64) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    // --- Mock provider ---

    struct EchoProvider {
        fail: bool,
        requests: Arc<Mutex<Vec<CompletionRequest>>>,
    }

    impl LlmProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(LlmError::AuthenticationFailed);
            }
            let last = request
                .messages
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_default();
            Ok(CompletionResponse {
                id: "echo-1".to_string(),
                content: format!("You said: {last}"),
                model: request.model.clone(),
                usage: Usage::default(),
            })
        }
    }

    fn service(fail: bool) -> (ChatService<VecStorage>, Arc<Mutex<Vec<CompletionRequest>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let provider = EchoProvider {
            fail,
            requests: Arc::clone(&requests),
        };
        let gateway = AssistantGateway::new(BoxLlmProvider::new(provider), AssistantConfig::default());
        (
            ChatService::new(VecStorage::default(), Arc::new(gateway)),
            requests,
        )
    }

    #[tokio::test]
    async fn send_message_stores_both_turns() {
        let (service, _) = service(false);
        let conversation = service
            .create_conversation(NewConversation::default())
            .await
            .unwrap();

        let exchange = service
            .send_message(conversation.id, "  I have a headache  ")
            .await
            .unwrap();
        assert_eq!(exchange.user_message.content, "I have a headache");
        assert_eq!(exchange.user_message.role, MessageRole::User);
        assert_eq!(exchange.assistant_message.content, "You said: I have a headache");
        assert_eq!(exchange.assistant_message.role, MessageRole::Assistant);

        let messages = service.get_messages(conversation.id).await.unwrap();
        assert_eq!(messages.len(), 2);
    }

    #[tokio::test]
    async fn send_message_history_excludes_new_message_once() {
        let (service, requests) = service(false);
        let conversation = service
            .create_conversation(NewConversation::default())
            .await
            .unwrap();

        service.send_message(conversation.id, "first").await.unwrap();
        service.send_message(conversation.id, "second").await.unwrap();

        let requests = requests.lock().unwrap();
        let history = &requests[1].messages;
        let contents: Vec<&str> = history.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "You said: first", "second"]);
        assert_eq!(history[1].role, MessageRole::Assistant);
    }

    #[tokio::test]
    async fn send_message_unknown_conversation_stores_nothing() {
        let (service, requests) = service(false);
        let err = service.send_message(99, "hello").await.unwrap_err();
        assert!(matches!(err, ChatError::ConversationNotFound));
        assert!(service.get_messages(99).await.unwrap().is_empty());
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn send_message_gateway_failure_keeps_user_message() {
        let (service, _) = service(true);
        let conversation = service
            .create_conversation(NewConversation::default())
            .await
            .unwrap();

        let err = service
            .send_message(conversation.id, "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Assistant(_)));

        let messages = service.get_messages(conversation.id).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, MessageRole::User);
    }
}
