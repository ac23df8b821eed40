pub mod error;
pub mod gemini;
pub mod mock;
pub mod provider;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};

use crate::settings::ProviderConfig;

pub use error::ProviderError;
pub use gemini::{GeminiConfig, GeminiProvider};
pub use provider::SpeechProvider;
pub use types::*;

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Build the configured provider. `env_api_key` takes precedence over the
/// key stored in settings.
pub fn create_provider(
    config: &ProviderConfig,
    env_api_key: Option<String>,
) -> Result<Arc<dyn SpeechProvider>> {
    match config {
        ProviderConfig::Gemini {
            api_key,
            model,
            base_url,
            timeout_secs,
        } => {
            let Some(api_key) = env_api_key
                .filter(|key| !key.trim().is_empty())
                .or_else(|| api_key.clone())
            else {
                bail!("No Gemini API key: set {API_KEY_ENV} or provider.api_key in settings")
            };

            let provider = GeminiProvider::new(GeminiConfig {
                api_key,
                model: model.clone(),
                base_url: base_url.clone(),
                timeout: Duration::from_secs(*timeout_secs),
            })?;
            Ok(Arc::new(provider))
        }
        ProviderConfig::Mock { behavior } => Ok(Arc::new(mock::MockProvider::new(behavior.clone()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_requires_key() {
        let err = create_provider(&ProviderConfig::default(), None)
            .err()
            .unwrap();
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_env_key_is_used() {
        let provider = create_provider(&ProviderConfig::default(), Some("k".to_string())).unwrap();
        assert_eq!(provider.name(), "Gemini");
    }

    #[test]
    fn test_blank_env_key_falls_back_to_settings() {
        let config = ProviderConfig::Gemini {
            api_key: Some("stored".to_string()),
            model: gemini::DEFAULT_MODEL.to_string(),
            base_url: gemini::DEFAULT_BASE_URL.to_string(),
            timeout_secs: 5,
        };
        assert!(create_provider(&config, Some("  ".to_string())).is_ok());
    }

    #[test]
    fn test_mock_config() {
        let config = ProviderConfig::Mock {
            behavior: mock::MockBehavior::EmptyResponse,
        };
        assert_eq!(create_provider(&config, None).unwrap().name(), "mock");
    }
}
