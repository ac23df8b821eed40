use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SpeechError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Hombre,
    Mujer,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Gender::Hombre => write!(f, "Hombre"),
            Gender::Mujer => write!(f, "Mujer"),
        }
    }
}

/// A voice profile offered to the user. Several profiles may share one
/// provider voice and differ only in the personality hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceOption {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    /// Prebuilt voice name understood by the provider
    pub api_voice_name: String,
    #[serde(default)]
    pub variant_description: Option<String>,
}

impl VoiceOption {
    pub fn new(
        id: &str,
        name: &str,
        gender: Gender,
        api_voice_name: &str,
        variant_description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            gender,
            api_voice_name: api_voice_name.to_string(),
            variant_description: Some(variant_description.to_string()),
        }
    }

    /// Personality hint for the system instruction
    pub fn personality(&self) -> &str {
        self.variant_description.as_deref().unwrap_or("Standard")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceCatalog {
    voices: Vec<VoiceOption>,
}

impl VoiceCatalog {
    pub fn new(voices: Vec<VoiceOption>) -> Self {
        Self { voices }
    }

    pub fn get(&self, id: &str) -> Option<&VoiceOption> {
        self.voices.iter().find(|voice| voice.id == id)
    }

    /// Look up a voice, failing with `VoiceNotFound`
    pub fn resolve(&self, id: &str) -> Result<&VoiceOption, SpeechError> {
        self.get(id)
            .ok_or_else(|| SpeechError::VoiceNotFound(id.to_string()))
    }

    pub fn voices(&self) -> &[VoiceOption] {
        &self.voices
    }

    pub fn by_gender(&self, gender: Gender) -> impl Iterator<Item = &VoiceOption> {
        self.voices.iter().filter(move |voice| voice.gender == gender)
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

impl Default for VoiceCatalog {
    /// Ten profiles built on the five prebuilt Gemini voices
    fn default() -> Self {
        use Gender::*;

        Self::new(vec![
            VoiceOption::new("v1", "Mateo", Hombre, "Fenrir", "Standard"),
            VoiceOption::new("v2", "Santiago", Hombre, "Puck", "Standard"),
            VoiceOption::new("v3", "Diego", Hombre, "Charon", "Standard"),
            VoiceOption::new("v4", "Lucas", Hombre, "Fenrir", "Slightly deeper and calmer"),
            VoiceOption::new("v5", "Alejandro", Hombre, "Puck", "More energetic"),
            VoiceOption::new("v6", "Sofía", Mujer, "Kore", "Standard"),
            VoiceOption::new("v7", "Valentina", Mujer, "Zephyr", "Standard"),
            VoiceOption::new("v8", "Isabella", Mujer, "Kore", "Soft and gentle"),
            VoiceOption::new("v9", "Camila", Mujer, "Zephyr", "Deeper professional tone"),
            VoiceOption::new("v10", "Mariana", Mujer, "Kore", "Very cheerful and bright"),
        ])
    }
}
