pub mod catalog;
pub mod history;
pub mod orchestrator;
pub mod params;
pub mod prompt;

pub use catalog::{Gender, VoiceCatalog, VoiceOption};
pub use history::{HistoryEntry, SessionHistory};
pub use orchestrator::{SpeechArtifact, SpeechOrchestrator};
pub use params::{Accent, SpeechParameters, Style};
pub use prompt::SpecialTag;
