use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::speech::orchestrator::DEFAULT_FILENAME_PREFIX;
use crate::speech::params::{Accent, SpeechParameters, Style, DEFAULT_VOICE_ID};
use crate::tts::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProviderConfig {
    #[serde(rename = "gemini")]
    Gemini {
        /// Falls back to the GEMINI_API_KEY environment variable when unset
        #[serde(default)]
        api_key: Option<String>,
        #[serde(default = "default_model")]
        model: String,
        #[serde(default = "default_base_url")]
        base_url: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
    #[serde(rename = "mock")]
    Mock {
        #[serde(default)]
        behavior: crate::tts::mock::MockBehavior,
    },
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::Gemini {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Parameters used when the user does not specify them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeechDefaults {
    #[serde(default = "default_voice_id")]
    pub voice_id: String,
    #[serde(default)]
    pub accent: Accent,
    #[serde(default)]
    pub style: Style,
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default)]
    pub pitch: f32,
}

impl Default for SpeechDefaults {
    fn default() -> Self {
        Self {
            voice_id: default_voice_id(),
            accent: Accent::default(),
            style: Style::default(),
            speed: default_speed(),
            pitch: 0.0,
        }
    }
}

impl SpeechDefaults {
    /// Parameters for `text` with every other field taken from the defaults
    pub fn parameters(&self, text: impl Into<String>) -> SpeechParameters {
        SpeechParameters::new(text)
            .with_voice(self.voice_id.clone())
            .with_accent(self.accent)
            .with_style(self.style)
            .with_speed(self.speed)
            .with_pitch(self.pitch)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputSettings {
    /// Where generated files are written; the working directory when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: None,
            filename_prefix: default_filename_prefix(),
        }
    }
}

/// Core configuration for VozGenius, stored as TOML
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Speech generation backend
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Defaults for voice, accent, style, speed and pitch
    #[serde(default)]
    pub defaults: SpeechDefaults,

    /// Where and how artifacts are written
    #[serde(default)]
    pub output: OutputSettings,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_voice_id() -> String {
    DEFAULT_VOICE_ID.to_string()
}

fn default_speed() -> f32 {
    1.0
}

fn default_filename_prefix() -> String {
    DEFAULT_FILENAME_PREFIX.to_string()
}
