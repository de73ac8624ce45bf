//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both the CLI and
//! the REST API. Services are generic over the storage trait, but AppState
//! pins them to the concrete infra implementation.

use std::sync::Arc;

use medassist_core::assistant::gateway::AssistantGateway;
use medassist_core::chat::service::ChatService;
use medassist_core::llm::box_provider::BoxLlmProvider;
use medassist_infra::llm::create_provider;
use medassist_infra::memory::MemStorage;
use medassist_types::config::AssistantConfig;
use secrecy::SecretString;

/// Concrete type alias for the chat service pinned to in-memory storage.
pub type ConcreteChatService = ChatService<MemStorage>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
}

impl AppState {
    /// Wire fresh in-memory storage to the configured completion provider.
    pub fn new(config: &AssistantConfig, api_key: SecretString) -> Self {
        Self::with_provider(create_provider(config, api_key), config.clone())
    }

    /// Wire fresh in-memory storage to an already-built provider.
    pub fn with_provider(provider: BoxLlmProvider, config: AssistantConfig) -> Self {
        let gateway = AssistantGateway::new(provider, config);
        let chat_service = ChatService::new(MemStorage::new(), Arc::new(gateway));

        Self {
            chat_service: Arc::new(chat_service),
        }
    }
}
