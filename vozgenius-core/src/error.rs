use thiserror::Error;

use crate::audio::AudioError;
use crate::tts::ProviderError;

/// Failures of a single speech generation. None of them are retried and none
/// affect previously generated artifacts.
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Voice not found: {0}")]
    VoiceNotFound(String),

    #[error("Invalid speech parameters: {0}")]
    InvalidParameters(String),

    #[error("Malformed audio payload: {0}")]
    MalformedPayload(#[source] AudioError),

    #[error("No audio was generated, try again")]
    NoAudioGenerated,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
