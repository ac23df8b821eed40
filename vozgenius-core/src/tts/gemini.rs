//! Gemini text-to-speech over the generateContent REST API

use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::error::ProviderError;
use super::provider::SpeechProvider;
use super::types::{GenerateSpeechRequest, GenerateSpeechResponse, ResponseModality};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-tts";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Transport(anyhow!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl SpeechProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn generate(
        &self,
        request: GenerateSpeechRequest,
    ) -> Result<GenerateSpeechResponse, ProviderError> {
        let body = GeminiRequest::from_request(&request);
        debug!(
            model = %self.config.model,
            voice = %request.voice_name,
            prompt_len = request.prompt.len(),
            "Sending Gemini speech request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                debug!(?e, "Gemini API call failed");
                ProviderError::Transport(anyhow!("Network error: {e}"))
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(anyhow!("Failed to read response: {e}")))?;

        if !status.is_success() {
            warn!(%status, "Gemini API returned error");
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let parsed: GenerateSpeechResponse = serde_json::from_str(&response_text)?;
        info!(
            candidates = parsed.candidates.len(),
            bytes = response_text.len(),
            "Gemini speech response received"
        );
        Ok(parsed)
    }
}

// Gemini API request types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    system_instruction: GeminiContent,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiTextPart>,
}

#[derive(Debug, Serialize)]
struct GeminiTextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<ResponseModality>,
    speech_config: SpeechConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig {
    voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig {
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig {
    voice_name: String,
}

impl GeminiRequest {
    fn from_request(request: &GenerateSpeechRequest) -> Self {
        let text_content = |text: &str| GeminiContent {
            parts: vec![GeminiTextPart {
                text: text.to_string(),
            }],
        };

        Self {
            contents: vec![text_content(&request.prompt)],
            system_instruction: text_content(&request.system_instruction),
            generation_config: GenerationConfig {
                response_modalities: vec![request.modality],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: request.voice_name.clone(),
                        },
                    },
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateSpeechRequest {
            prompt: "Hola".to_string(),
            system_instruction: "Act as".to_string(),
            modality: ResponseModality::Audio,
            voice_name: "Kore".to_string(),
        };

        let value = serde_json::to_value(GeminiRequest::from_request(&request)).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{"parts": [{"text": "Hola"}]}],
                "systemInstruction": {"parts": [{"text": "Act as"}]},
                "generationConfig": {
                    "responseModalities": ["AUDIO"],
                    "speechConfig": {
                        "voiceConfig": {"prebuiltVoiceConfig": {"voiceName": "Kore"}}
                    }
                }
            })
        );
    }

    #[test]
    fn test_endpoint() {
        let mut config = GeminiConfig::new("key".to_string());
        config.base_url = "http://localhost:9999/v1beta/".to_string();
        let provider = GeminiProvider::new(config).unwrap();
        assert_eq!(
            provider.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash-preview-tts:generateContent"
        );
    }
}
