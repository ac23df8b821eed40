//! Canonical 16-bit PCM WAV encoding
//!
//! Produces the minimal RIFF/WAVE layout: a 12-byte RIFF header, a 16-byte
//! `fmt ` chunk and a single `data` chunk, 44 header bytes in total. All
//! integers are little-endian.

use std::path::Path;

use super::error::AudioError;
use super::pcm::SampleBuffer;

pub const WAV_HEADER_LEN: usize = 44;
pub const WAV_MIME_TYPE: &str = "audio/wav";

const BITS_PER_SAMPLE: u16 = 16;
const BYTES_PER_SAMPLE: u16 = BITS_PER_SAMPLE / 8;
const FMT_CHUNK_SIZE: u32 = 16;
const FORMAT_PCM: u16 = 1;

/// Scale a normalized sample to a signed 16-bit value.
///
/// Negative values scale by 32768 and non-negative ones by 32767, so -1.0 and
/// 1.0 land on `i16::MIN` and `i16::MAX`. Out-of-range input is clamped first
/// and the product truncates toward zero. NaN encodes as silence.
pub fn quantize(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    if clamped < 0.0 {
        (clamped * 32768.0) as i16
    } else {
        (clamped * 32767.0) as i16
    }
}

/// The fields of a canonical 44-byte WAV header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub chunk_size: u32,
    pub fmt_chunk_size: u32,
    pub audio_format: u16,
    pub num_channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_size: u32,
}

impl WavHeader {
    pub fn for_buffer(buffer: &SampleBuffer) -> Self {
        let channels = buffer.channel_count();
        let frame_bytes = channels as u64 * BYTES_PER_SAMPLE as u64;
        let data_size = saturating_u32(buffer.frame_count() as u64 * frame_bytes);

        Self {
            chunk_size: data_size.saturating_add(WAV_HEADER_LEN as u32 - 8),
            fmt_chunk_size: FMT_CHUNK_SIZE,
            audio_format: FORMAT_PCM,
            num_channels: channels,
            sample_rate: buffer.sample_rate(),
            byte_rate: saturating_u32(buffer.sample_rate() as u64 * frame_bytes),
            block_align: u16::try_from(frame_bytes).unwrap_or(u16::MAX),
            bits_per_sample: BITS_PER_SAMPLE,
            data_size,
        }
    }

    /// Total file length the header describes
    pub fn total_len(&self) -> usize {
        WAV_HEADER_LEN + self.data_size as usize
    }

    pub fn to_bytes(&self) -> [u8; WAV_HEADER_LEN] {
        let mut out = [0u8; WAV_HEADER_LEN];
        out[0..4].copy_from_slice(b"RIFF");
        out[4..8].copy_from_slice(&self.chunk_size.to_le_bytes());
        out[8..12].copy_from_slice(b"WAVE");
        out[12..16].copy_from_slice(b"fmt ");
        out[16..20].copy_from_slice(&self.fmt_chunk_size.to_le_bytes());
        out[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
        out[22..24].copy_from_slice(&self.num_channels.to_le_bytes());
        out[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        out[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        out[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        out[36..40].copy_from_slice(b"data");
        out[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        out
    }

    /// Read back a canonical header. Only the chunk ids and the length are
    /// checked; field values are returned as stored.
    pub fn parse(bytes: &[u8]) -> Result<Self, AudioError> {
        if bytes.len() < WAV_HEADER_LEN {
            return Err(AudioError::InvalidWavHeader(format!(
                "expected at least {WAV_HEADER_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        for (offset, id) in [(0, b"RIFF"), (8, b"WAVE"), (12, b"fmt "), (36, b"data")] {
            if &bytes[offset..offset + 4] != id {
                return Err(AudioError::InvalidWavHeader(format!(
                    "expected {:?} at offset {offset}",
                    String::from_utf8_lossy(id)
                )));
            }
        }

        let u16_at = |at: usize| u16::from_le_bytes([bytes[at], bytes[at + 1]]);
        let u32_at = |at: usize| {
            u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };

        Ok(Self {
            chunk_size: u32_at(4),
            fmt_chunk_size: u32_at(16),
            audio_format: u16_at(20),
            num_channels: u16_at(22),
            sample_rate: u32_at(24),
            byte_rate: u32_at(28),
            block_align: u16_at(32),
            bits_per_sample: u16_at(34),
            data_size: u32_at(40),
        })
    }
}

/// An encoded WAV file, ready to be written out or played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavContainer {
    header: WavHeader,
    bytes: Vec<u8>,
}

impl WavContainer {
    pub fn encode(buffer: &SampleBuffer) -> Self {
        encode_wav(buffer)
    }

    pub fn header(&self) -> &WavHeader {
        &self.header
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn mime_type(&self) -> &'static str {
        WAV_MIME_TYPE
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        tokio::fs::write(path, &self.bytes).await
    }
}

/// Serialize a sample buffer as a 16-bit PCM WAV file, interleaving channels
/// frame by frame. Never fails; an empty buffer gives a header-only file.
pub fn encode_wav(buffer: &SampleBuffer) -> WavContainer {
    let header = WavHeader::for_buffer(buffer);
    let mut bytes = Vec::with_capacity(header.total_len());
    bytes.extend_from_slice(&header.to_bytes());

    let channels = buffer.channels();
    for frame in 0..buffer.frame_count() {
        for channel in channels {
            bytes.extend_from_slice(&quantize(channel[frame]).to_le_bytes());
        }
    }

    tracing::debug!(
        frames = buffer.frame_count(),
        channels = header.num_channels,
        bytes = bytes.len(),
        "Encoded WAV container"
    );

    WavContainer { header, bytes }
}

/// Download name for a generated file, e.g. `vozgenius-1718000000000.wav`
pub fn suggested_filename(prefix: &str, timestamp_ms: i64) -> String {
    format!("{prefix}-{timestamp_ms}.wav")
}

fn saturating_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
