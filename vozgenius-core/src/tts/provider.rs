use async_trait::async_trait;

use super::error::ProviderError;
use super::types::{GenerateSpeechRequest, GenerateSpeechResponse};

/// A hosted speech generation service.
///
/// Implementations make exactly one call per `generate` and never retry;
/// transport and API failures are returned to the caller as-is.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(
        &self,
        request: GenerateSpeechRequest,
    ) -> Result<GenerateSpeechResponse, ProviderError>;
}
