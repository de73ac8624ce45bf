//! Configuration loader for MedAssist.
//!
//! Reads an optional TOML file into [`AppConfig`] and resolves the
//! completion-service credentials from the environment. Falls back to
//! defaults when the file is missing or malformed.

use std::path::Path;

use medassist_types::config::AppConfig;
use secrecy::SecretString;

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["OPENAI_API_KEY", "OPENAI_API_KEY_ENV_VAR"];

/// Environment variable overriding `assistant.base_url`.
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Key used when no API key is configured. Requests will fail upstream.
const PLACEHOLDER_API_KEY: &str = "default_key";

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_config(path: &Path) -> AppConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            AppConfig::default()
        }
    }
}

/// Apply environment overrides (currently only the base URL).
pub fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(base_url) = lookup(BASE_URL_VAR).filter(|v| !v.is_empty()) {
        tracing::debug!(base_url = %base_url, "Base URL overridden from environment");
        config.assistant.base_url = base_url;
    }
}

/// Resolve the API key from the first non-empty variable in [`API_KEY_VARS`].
///
/// Falls back to a placeholder (with a warning) so the server still starts;
/// completion calls then fail and surface as the generic assistant error.
pub fn resolve_api_key(lookup: impl Fn(&str) -> Option<String>) -> SecretString {
    for var in API_KEY_VARS {
        if let Some(key) = lookup(var).filter(|v| !v.is_empty()) {
            return SecretString::from(key);
        }
    }
    tracing::warn!("No OpenAI API key found in environment; completion requests will fail");
    SecretString::from(PLACEHOLDER_API_KEY.to_string())
}

/// Environment lookup backed by `std::env::var`.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;
    use tempfile::TempDir;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("medassist.toml")).await;
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.assistant.model, "gpt-4o");
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("medassist.toml");
        tokio::fs::write(
            &path,
            r#"
[server]
host = "0.0.0.0"
port = 8080

[assistant]
model = "gpt-4o-mini"
temperature = 0.2
"#,
        )
        .await
        .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.assistant.model, "gpt-4o-mini");
        assert!((config.assistant.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.assistant.chat_max_tokens, 1000);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("medassist.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn resolve_api_key_prefers_primary_var() {
        let key = resolve_api_key(env(&[
            ("OPENAI_API_KEY", "sk-primary"),
            ("OPENAI_API_KEY_ENV_VAR", "sk-secondary"),
        ]));
        assert_eq!(key.expose_secret(), "sk-primary");
    }

    #[test]
    fn resolve_api_key_falls_back_to_secondary_var() {
        let key = resolve_api_key(env(&[
            ("OPENAI_API_KEY", ""),
            ("OPENAI_API_KEY_ENV_VAR", "sk-secondary"),
        ]));
        assert_eq!(key.expose_secret(), "sk-secondary");
    }

    #[test]
    fn resolve_api_key_placeholder_when_unset() {
        let key = resolve_api_key(env(&[]));
        assert_eq!(key.expose_secret(), PLACEHOLDER_API_KEY);
    }

    #[test]
    fn apply_env_overrides_sets_base_url() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, env(&[("OPENAI_BASE_URL", "http://localhost:8000/v1")]));
        assert_eq!(config.assistant.base_url, "http://localhost:8000/v1");

        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, env(&[]));
        assert_eq!(config.assistant.base_url, "https://api.openai.com/v1");
    }
}
