//! Audio pipeline: base64 PCM payloads in, WAV containers out

pub mod context;
pub mod error;
pub mod pcm;
#[cfg(feature = "playback")]
pub mod playback;
pub mod wav;

pub use context::AudioContext;
pub use error::AudioError;
pub use pcm::SampleBuffer;
pub use wav::{WavContainer, WavHeader};

/// Sample rate of the PCM the speech provider returns
pub const PROVIDER_SAMPLE_RATE: u32 = 24_000;

/// Audio format profile specifying sample rate and channel count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioProfile {
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioProfile {
    /// Mono 16-bit PCM at 24 kHz
    pub const fn provider_default() -> Self {
        Self {
            sample_rate: PROVIDER_SAMPLE_RATE,
            channels: 1,
        }
    }
}

impl Default for AudioProfile {
    fn default() -> Self {
        Self::provider_default()
    }
}
