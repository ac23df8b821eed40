use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::error::ProviderError;
use super::provider::SpeechProvider;
use super::types::{
    Candidate, CandidateContent, GenerateSpeechRequest, GenerateSpeechResponse, Part,
};

/// Mock behavior for the mock provider
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MockBehavior {
    /// Return the given base64 PCM as inline audio
    Audio { data: String },
    /// Return a response with no candidates
    EmptyResponse,
    /// Return a text part where audio was expected
    TextOnly { text: String },
    /// Fail with an HTTP-style API error
    ApiError { status: u16, body: String },
    /// Fail as if the network call never completed
    TransportError,
    /// Play the queued behaviors in order, then fall back to silence
    BehaviorQueue { behaviors: Vec<MockBehavior> },
}

impl Default for MockBehavior {
    fn default() -> Self {
        // 0.1s of silence at 24 kHz
        let silence = vec![0u8; 4800];
        Self::Audio {
            data: base64::Engine::encode(&base64::engine::general_purpose::STANDARD, silence),
        }
    }
}

/// Mock speech provider for testing
#[derive(Clone, Default)]
pub struct MockProvider {
    behavior: Arc<Mutex<MockBehavior>>,
    call_count: Arc<Mutex<usize>>,
    captured_requests: Arc<Mutex<Vec<GenerateSpeechRequest>>>,
}

impl MockProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            call_count: Arc::new(Mutex::new(0)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn pop_behavior_from_queue(behavior: &mut MockBehavior) -> MockBehavior {
        if let MockBehavior::BehaviorQueue { behaviors } = behavior {
            if behaviors.is_empty() {
                return MockBehavior::default();
            }
            return behaviors.remove(0);
        }
        behavior.clone()
    }

    pub fn set_behavior(&self, behavior: MockBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_captured_requests(&self) -> Vec<GenerateSpeechRequest> {
        self.captured_requests.lock().unwrap().clone()
    }

    pub fn get_last_captured_request(&self) -> Option<GenerateSpeechRequest> {
        self.captured_requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SpeechProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(
        &self,
        request: GenerateSpeechRequest,
    ) -> Result<GenerateSpeechResponse, ProviderError> {
        self.captured_requests.lock().unwrap().push(request);
        *self.call_count.lock().unwrap() += 1;

        let effective = {
            let mut behavior = self.behavior.lock().unwrap();
            Self::pop_behavior_from_queue(&mut behavior)
        };

        match effective {
            MockBehavior::Audio { data } => Ok(GenerateSpeechResponse::with_audio(data)),
            MockBehavior::EmptyResponse => Ok(GenerateSpeechResponse::default()),
            MockBehavior::TextOnly { text } => Ok(GenerateSpeechResponse {
                candidates: vec![Candidate {
                    content: Some(CandidateContent {
                        parts: vec![Part {
                            text: Some(text),
                            inline_data: None,
                        }],
                        role: Some("model".to_string()),
                    }),
                    finish_reason: Some("STOP".to_string()),
                }],
            }),
            MockBehavior::ApiError { status, body } => Err(ProviderError::Api { status, body }),
            MockBehavior::TransportError => Err(ProviderError::Transport(anyhow::anyhow!(
                "Mock transport error"
            ))),
            MockBehavior::BehaviorQueue { .. } => Err(ProviderError::InvalidResponse(
                anyhow::anyhow!("Nested behavior queues are not supported"),
            )),
        }
    }
}
