//! Base64 PCM payload decoding into normalized sample buffers

use std::time::Duration;

use base64::Engine;

use super::error::AudioError;

/// Divisor used to normalize signed 16-bit samples. -32768 maps to exactly
/// -1.0 while 32767 stays just below 1.0; the WAV encoder mirrors this.
const I16_NORMALIZER: f32 = 32768.0;

/// Base64 audio text exactly as the provider returned it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudioPayload(String);

impl EncodedAudioPayload {
    pub fn new(data: impl Into<String>) -> Self {
        Self(data.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode as mono 16-bit little-endian PCM at `sample_rate`
    pub fn decode(&self, sample_rate: u32) -> Result<SampleBuffer, AudioError> {
        decode_pcm16(&self.0, sample_rate)
    }
}

/// Normalized audio held in memory, one sample array per channel.
///
/// Every channel has the same number of frames; the constructors enforce it
/// and nothing mutates a buffer once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    sample_rate: u32,
    frame_count: usize,
    channels: Vec<Vec<f32>>,
}

impl SampleBuffer {
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> Result<Self, AudioError> {
        let Some(first) = channels.first() else {
            return Err(AudioError::NoChannels);
        };
        if channels.len() > u16::MAX as usize {
            return Err(AudioError::TooManyChannels(channels.len()));
        }

        let frame_count = first.len();
        for (channel, samples) in channels.iter().enumerate().skip(1) {
            if samples.len() != frame_count {
                return Err(AudioError::ChannelLengthMismatch {
                    channel,
                    expected: frame_count,
                    actual: samples.len(),
                });
            }
        }

        Ok(Self {
            sample_rate,
            frame_count,
            channels,
        })
    }

    /// Single-channel buffer; cannot fail
    pub fn mono(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            frame_count: samples.len(),
            channels: vec![samples],
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> u16 {
        self.channels.len() as u16
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn is_empty(&self) -> bool {
        self.frame_count == 0
    }

    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Playback length in seconds (frames / sample rate)
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count as f64 / self.sample_rate as f64
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.duration_secs())
    }
}

/// Decode a base64 string of little-endian signed 16-bit samples into a mono
/// buffer. An empty string yields an empty buffer.
pub fn decode_pcm16(payload: &str, sample_rate: u32) -> Result<SampleBuffer, AudioError> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(payload)?;
    if bytes.len() % 2 != 0 {
        return Err(AudioError::OddByteLength(bytes.len()));
    }

    let samples = pcm16_to_f32(&bytes);
    tracing::debug!(
        bytes = bytes.len(),
        frames = samples.len(),
        sample_rate,
        "Decoded PCM payload"
    );

    Ok(SampleBuffer::mono(sample_rate, samples))
}

/// Reinterpret little-endian i16 pairs as normalized floats. A trailing odd
/// byte is ignored; callers that care check the length first.
pub fn pcm16_to_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|chunk| {
            let sample = i16::from_le_bytes([chunk[0], chunk[1]]);
            sample as f32 / I16_NORMALIZER
        })
        .collect()
}
