use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::catalog::{VoiceCatalog, VoiceOption};
use super::history::HistoryEntry;
use super::params::SpeechParameters;
use super::prompt::{system_instruction, user_prompt};
use crate::audio::{AudioContext, SampleBuffer, WavContainer};
use crate::error::SpeechError;
use crate::tts::{GenerateSpeechRequest, ResponseModality, SpeechProvider};

pub const DEFAULT_FILENAME_PREFIX: &str = "vozgenius";

/// Result of a successful generation
#[derive(Debug, Clone)]
pub struct SpeechArtifact {
    pub buffer: SampleBuffer,
    pub wav: WavContainer,
    pub duration_secs: f64,
    pub voice: VoiceOption,
    pub history: HistoryEntry,
}

impl SpeechArtifact {
    /// Suggested download name, `{prefix}-{millis}.wav`
    pub fn filename(&self) -> &str {
        &self.history.filename
    }
}

/// Turns speech parameters into a provider call and the provider's PCM into
/// a WAV artifact.
///
/// The audio context is owned by the caller and shared between every
/// orchestrator; it is never recreated here.
pub struct SpeechOrchestrator {
    provider: Arc<dyn SpeechProvider>,
    audio: Arc<AudioContext>,
    catalog: VoiceCatalog,
    filename_prefix: String,
}

impl SpeechOrchestrator {
    pub fn new(provider: Arc<dyn SpeechProvider>, audio: Arc<AudioContext>) -> Self {
        Self {
            provider,
            audio,
            catalog: VoiceCatalog::default(),
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
        }
    }

    pub fn with_catalog(mut self, catalog: VoiceCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_filename_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.filename_prefix = prefix.into();
        self
    }

    pub fn catalog(&self) -> &VoiceCatalog {
        &self.catalog
    }

    pub fn audio_context(&self) -> &Arc<AudioContext> {
        &self.audio
    }

    /// Validate the parameters, resolve the voice and build the provider
    /// request. Fails before any network traffic.
    pub fn build_request(
        &self,
        params: &SpeechParameters,
    ) -> Result<(GenerateSpeechRequest, &VoiceOption), SpeechError> {
        let voice = self.catalog.resolve(&params.voice_id)?;
        params.validate()?;

        let request = GenerateSpeechRequest {
            prompt: user_prompt(params),
            system_instruction: system_instruction(params, voice),
            modality: ResponseModality::Audio,
            voice_name: voice.api_voice_name.clone(),
        };

        Ok((request, voice))
    }

    pub async fn generate(&self, params: &SpeechParameters) -> Result<SpeechArtifact, SpeechError> {
        let (request, voice) = self.build_request(params)?;
        debug!(
            provider = self.provider.name(),
            voice_id = %voice.id,
            voice_name = %voice.api_voice_name,
            accent = %params.accent,
            style = %params.style,
            "Requesting speech"
        );

        let response = self.provider.generate(request).await?;
        let payload = response
            .audio_payload()
            .ok_or(SpeechError::NoAudioGenerated)?;

        let buffer = self
            .audio
            .decode(&payload)
            .await
            .map_err(SpeechError::MalformedPayload)?;
        let wav = self.audio.encode(&buffer);
        let duration_secs = buffer.duration_secs();

        let history = HistoryEntry::new(
            &params.text,
            duration_secs,
            &voice.name,
            params.style,
            Utc::now(),
            &self.filename_prefix,
        );

        info!(
            voice = %voice.name,
            frames = buffer.frame_count(),
            duration_secs,
            wav_bytes = wav.len(),
            "Speech generated"
        );

        Ok(SpeechArtifact {
            buffer,
            wav,
            duration_secs,
            voice: voice.clone(),
            history,
        })
    }
}
