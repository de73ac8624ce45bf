//! AssistantGateway -- the only component that talks to the completion service.
//!
//! Each call builds exactly one `CompletionRequest` and sends it once. There
//! are no retries and no caching. Provider failures are logged here and
//! replaced by [`AssistantError::Unavailable`], so callers never see
//! provider-internal detail.

use medassist_types::config::AssistantConfig;
use medassist_types::error::AssistantError;
use medassist_types::llm::{CompletionRequest, Message};
use tracing::{debug, error, info_span, Instrument};

use super::prompts::{
    QuickAction, CHAT_FALLBACK_REPLY, MEDICAL_SYSTEM_PROMPT, QUICK_ACTION_FALLBACK_REPLY,
    QUICK_ACTION_SYSTEM_PROMPT,
};
use crate::llm::box_provider::BoxLlmProvider;

/// Stateless relay from chat history to the completion provider.
pub struct AssistantGateway {
    provider: BoxLlmProvider,
    config: AssistantConfig,
}

impl AssistantGateway {
    pub fn new(provider: BoxLlmProvider, config: AssistantConfig) -> Self {
        Self { provider, config }
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Generate the assistant's reply to an ordered chat history.
    ///
    /// The MedAssist system instruction is sent first, followed by `history`
    /// unchanged. An empty reply is replaced by a fixed apology.
    pub async fn medical_response(&self, history: &[Message]) -> Result<String, AssistantError> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: history.to_vec(),
            system: Some(MEDICAL_SYSTEM_PROMPT.to_string()),
            max_tokens: self.config.chat_max_tokens,
            temperature: Some(self.config.temperature),
        };

        let span = info_span!(
            "gen_ai.chat",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
            history_len = history.len(),
        );

        let content = self.complete(&request).instrument(span).await?;
        Ok(or_fallback(content, CHAT_FALLBACK_REPLY))
    }

    /// Generate the canned answer for a quick-action key.
    ///
    /// Unknown keys use the `symptoms` prompt.
    pub async fn quick_action_response(&self, action: &str) -> Result<String, AssistantError> {
        let action = QuickAction::from_key(action);
        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![Message::user(action.prompt())],
            system: Some(QUICK_ACTION_SYSTEM_PROMPT.to_string()),
            max_tokens: self.config.quick_action_max_tokens,
            temperature: Some(self.config.temperature),
        };

        let span = info_span!(
            "gen_ai.quick_action",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            quick_action = %action,
        );

        let content = self.complete(&request).instrument(span).await?;
        Ok(or_fallback(content, QUICK_ACTION_FALLBACK_REPLY))
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, AssistantError> {
        match self.provider.complete(request).await {
            Ok(response) => {
                debug!(
                    response_id = %response.id,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "Completion received"
                );
                Ok(response.content)
            }
            Err(e) => {
                error!(provider = self.provider.name(), error = %e, "Completion request failed");
                Err(AssistantError::Unavailable)
            }
        }
    }
}

fn or_fallback(content: String, fallback: &str) -> String {
    if content.is_empty() {
        fallback.to_string()
    } else {
        content
    }
}
