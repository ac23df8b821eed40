use std::sync::Arc;

use super::error::AudioError;
use super::pcm::{EncodedAudioPayload, SampleBuffer};
use super::wav::{encode_wav, WavContainer};
use super::AudioProfile;

/// Decoding context for provider audio.
///
/// Created once by the host at startup and handed to every orchestrator as an
/// `Arc`. It holds no per-request state, so concurrent requests share it
/// freely.
#[derive(Debug)]
pub struct AudioContext {
    profile: AudioProfile,
}

impl AudioContext {
    pub fn new(profile: AudioProfile) -> Self {
        tracing::debug!(
            sample_rate = profile.sample_rate,
            channels = profile.channels,
            "Audio context created"
        );
        Self { profile }
    }

    /// Shared handle using the provider's 24 kHz mono format
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new(AudioProfile::provider_default()))
    }

    pub fn profile(&self) -> AudioProfile {
        self.profile
    }

    pub fn sample_rate(&self) -> u32 {
        self.profile.sample_rate
    }

    /// Decode a provider payload at this context's sample rate
    pub async fn decode(&self, payload: &EncodedAudioPayload) -> Result<SampleBuffer, AudioError> {
        payload.decode(self.profile.sample_rate)
    }

    pub fn encode(&self, buffer: &SampleBuffer) -> WavContainer {
        encode_wav(buffer)
    }
}

impl Default for AudioContext {
    fn default() -> Self {
        Self::new(AudioProfile::provider_default())
    }
}
