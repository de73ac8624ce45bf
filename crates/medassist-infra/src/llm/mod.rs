//! LLM provider implementations.
//!
//! Contains the concrete implementation of the [`LlmProvider`] trait
//! defined in `medassist-core` and a factory that builds it from
//! [`AssistantConfig`].
//!
//! [`LlmProvider`]: medassist_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::SecretString;

use medassist_core::llm::box_provider::BoxLlmProvider;
use medassist_types::config::AssistantConfig;

use self::openai_compat::config::{openai_defaults, OpenAiCompatConfig};
use self::openai_compat::OpenAiCompatibleProvider;

/// Build the provider config: OpenAI defaults with the configured base URL.
fn provider_config(config: &AssistantConfig, api_key: SecretString) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        base_url: config.base_url.clone(),
        ..openai_defaults(api_key, &config.model)
    }
}

/// Create a [`BoxLlmProvider`] for the configured OpenAI-compatible endpoint.
pub fn create_provider(config: &AssistantConfig, api_key: SecretString) -> BoxLlmProvider {
    let provider = OpenAiCompatibleProvider::new(provider_config(config, api_key));
    tracing::debug!(base_url = %config.base_url, model = %config.model, "LLM provider created");
    BoxLlmProvider::new(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider_uses_openai_name() {
        let provider = create_provider(
            &AssistantConfig::default(),
            SecretString::from("sk-test".to_string()),
        );
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn test_provider_config_honors_base_url_override() {
        let config = AssistantConfig {
            base_url: "http://localhost:11434/v1".to_string(),
            model: "llama3".to_string(),
            ..AssistantConfig::default()
        };
        let built = provider_config(&config, SecretString::from("sk-test".to_string()));
        assert_eq!(built.provider_name, "openai");
        assert_eq!(built.base_url, "http://localhost:11434/v1");
        assert_eq!(built.model, "llama3");
    }
}
