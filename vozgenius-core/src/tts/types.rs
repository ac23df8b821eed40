use serde::{Deserialize, Serialize};

use crate::audio::pcm::EncodedAudioPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseModality {
    #[default]
    Audio,
    Text,
}

/// Everything a provider needs for one generation
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSpeechRequest {
    pub prompt: String,
    pub system_instruction: String,
    pub modality: ResponseModality,
    pub voice_name: String,
}

// Response shape of the generateContent API. Every level is optional on the
// wire; an absent level means no audio was produced.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSpeechResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CandidateContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub data: String,
}

impl GenerateSpeechResponse {
    /// A single-candidate response carrying `data` as inline PCM
    pub fn with_audio(data: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: Some("audio/L16;codec=pcm;rate=24000".to_string()),
                            data: data.into(),
                        }),
                    }],
                    role: Some("model".to_string()),
                }),
                finish_reason: Some("STOP".to_string()),
            }],
        }
    }

    /// Inline audio of the first part of the first candidate. Empty data
    /// counts as no audio.
    pub fn audio_payload(&self) -> Option<EncodedAudioPayload> {
        let data = &self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .inline_data
            .as_ref()?
            .data;

        if data.is_empty() {
            return None;
        }
        Some(EncodedAudioPayload::new(data.clone()))
    }
}
