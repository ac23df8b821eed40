pub mod audio;
pub mod error;
pub mod settings;
pub mod speech;
pub mod tts;

// Public library API: the types a front end needs to run a generation.
pub use audio::{AudioContext, SampleBuffer, WavContainer};
pub use error::SpeechError;
pub use settings::{Settings, SettingsManager};
pub use speech::{SpeechArtifact, SpeechOrchestrator, SpeechParameters};
pub use tts::SpeechProvider;
