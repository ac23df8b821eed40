use anyhow::anyhow;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(anyhow::Error),

    #[error("Provider API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid provider response: {0}")]
    InvalidResponse(anyhow::Error),
}

impl From<serde_json::Error> for ProviderError {
    fn from(source: serde_json::Error) -> Self {
        Self::InvalidResponse(anyhow!(source))
    }
}
