use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("payload is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("payload decodes to {0} bytes, not a whole number of 16-bit samples")]
    OddByteLength(usize),

    #[error("sample buffer must have at least one channel")]
    NoChannels,

    #[error("{0} channels exceeds the WAV channel limit")]
    TooManyChannels(usize),

    #[error("channel {channel} has {actual} frames, expected {expected}")]
    ChannelLengthMismatch {
        channel: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid WAV header: {0}")]
    InvalidWavHeader(String),
}
