use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::error::SpeechError;

pub const SPEED_RANGE: RangeInclusive<f32> = 0.5..=2.0;
pub const PITCH_RANGE: RangeInclusive<f32> = -10.0..=10.0;
pub const DEFAULT_VOICE_ID: &str = "v1";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, strum::VariantArray,
)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    #[default]
    Espana,
    Mexico,
    Argentina,
}

impl Accent {
    /// Name used in the provider instructions
    pub const fn name(self) -> &'static str {
        match self {
            Self::Espana => "España",
            Self::Mexico => "México",
            Self::Argentina => "Argentina",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Espana => "espana",
            Self::Mexico => "mexico",
            Self::Argentina => "argentina",
        }
    }
}

impl TryFrom<&str> for Accent {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|accent| accent.slug() == lower || accent.name().to_lowercase() == lower)
            .ok_or_else(|| {
                format!("Invalid accent: {value}. Valid options: espana, mexico, argentina")
            })
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, strum::VariantArray,
)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    #[default]
    Natural,
    Alegre,
    Triste,
    Susurrar,
    Storyteller,
}

impl Style {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Natural => "Natural",
            Self::Alegre => "Alegre",
            Self::Triste => "Triste",
            Self::Susurrar => "Susurrar",
            Self::Storyteller => "Storyteller",
        }
    }
}

impl TryFrom<&str> for Style {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|style| style.name().to_lowercase() == lower)
            .ok_or_else(|| {
                format!(
                    "Invalid style: {value}. Valid options: natural, alegre, triste, susurrar, storyteller"
                )
            })
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User-facing parameters of one generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechParameters {
    pub text: String,
    pub voice_id: String,
    pub accent: Accent,
    pub style: Style,
    /// 0.5 is slow, 1.0 normal, 2.0 fast
    pub speed: f32,
    /// -10 (deeper) to 10 (higher)
    pub pitch: f32,
}

impl SpeechParameters {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            accent: Accent::default(),
            style: Style::default(),
            speed: 1.0,
            pitch: 0.0,
        }
    }

    pub fn with_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    pub fn with_accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }

    /// Reject requests that would waste a provider call
    pub fn validate(&self) -> Result<(), SpeechError> {
        if self.text.trim().is_empty() {
            return Err(SpeechError::InvalidParameters(
                "text must not be empty".to_string(),
            ));
        }
        if !SPEED_RANGE.contains(&self.speed) {
            return Err(SpeechError::InvalidParameters(format!(
                "speed {} outside {}..={}",
                self.speed,
                SPEED_RANGE.start(),
                SPEED_RANGE.end()
            )));
        }
        if !PITCH_RANGE.contains(&self.pitch) {
            return Err(SpeechError::InvalidParameters(format!(
                "pitch {} outside {}..={}",
                self.pitch,
                PITCH_RANGE.start(),
                PITCH_RANGE.end()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SpeechParameters::new("Hola");
        assert_eq!(params.voice_id, "v1");
        assert_eq!(params.accent, Accent::Espana);
        assert_eq!(params.style, Style::Natural);
        assert_eq!(params.speed, 1.0);
        assert_eq!(params.pitch, 0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_parse_accent() {
        assert_eq!(Accent::try_from("mexico").unwrap(), Accent::Mexico);
        assert_eq!(Accent::try_from("México").unwrap(), Accent::Mexico);
        assert_eq!(Accent::try_from(" ESPAÑA ").unwrap(), Accent::Espana);
        assert!(Accent::try_from("chile").is_err());
    }

    #[test]
    fn test_parse_style() {
        assert_eq!(Style::try_from("storyteller").unwrap(), Style::Storyteller);
        assert_eq!(Style::try_from("Susurrar").unwrap(), Style::Susurrar);
        assert!(Style::try_from("angry").is_err());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let params = SpeechParameters::new("x").with_speed(0.5).with_pitch(-10.0);
        assert!(params.validate().is_ok());
        let params = SpeechParameters::new("x").with_speed(2.0).with_pitch(10.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        for params in [
            SpeechParameters::new("x").with_speed(0.49),
            SpeechParameters::new("x").with_speed(f32::NAN),
            SpeechParameters::new("x").with_pitch(10.5),
            SpeechParameters::new("   \n"),
        ] {
            assert!(matches!(
                params.validate(),
                Err(SpeechError::InvalidParameters(_))
            ));
        }
    }

    #[test]
    fn test_display_uses_instruction_names() {
        assert_eq!(Accent::Argentina.to_string(), "Argentina");
        assert_eq!(Accent::Espana.to_string(), "España");
        assert_eq!(Style::Alegre.to_string(), "Alegre");
    }
}
