//! Configuration types for MedAssist.
//!
//! `AppConfig` represents the optional `medassist.toml` that controls the
//! listen address and the completion-service parameters.

use serde::{Deserialize, Serialize};

/// Top-level configuration. All fields have defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Completion-service parameters used by the assistant gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Output token cap for conversation replies.
    #[serde(default = "default_chat_max_tokens")]
    pub chat_max_tokens: u32,

    /// Output token cap for quick-action replies.
    #[serde(default = "default_quick_action_max_tokens")]
    pub quick_action_max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_chat_max_tokens() -> u32 {
    1000
}

fn default_quick_action_max_tokens() -> u32 {
    800
}

fn default_temperature() -> f64 {
    0.7
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            chat_max_tokens: default_chat_max_tokens(),
            quick_action_max_tokens: default_quick_action_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.assistant.model, "gpt-4o");
        assert_eq!(config.assistant.chat_max_tokens, 1000);
        assert_eq!(config.assistant.quick_action_max_tokens, 800);
        assert!((config.assistant.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_app_config_deserialize_with_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.assistant.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_app_config_deserialize_partial_section() {
        let toml_str = r#"
[server]
port = 8080

[assistant]
model = "gpt-4o-mini"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.assistant.model, "gpt-4o-mini");
        assert_eq!(config.assistant.chat_max_tokens, 1000);
    }
}
