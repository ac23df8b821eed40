//! Provider conditioning text.
//!
//! Nothing here is enforced locally: inline tags are passed through inside
//! the user's text and the provider decides how to honor them.

use strum::VariantArray;

use super::catalog::VoiceOption;
use super::params::SpeechParameters;

/// Inline markup the provider is told how to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::VariantArray)]
pub enum SpecialTag {
    Pausa,
    Risa,
    Grito,
    Llanto,
}

impl SpecialTag {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Pausa => "[pausa]",
            Self::Risa => "[risa]",
            Self::Grito => "[grito]",
            Self::Llanto => "[llanto]",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pausa => "Pausa",
            Self::Risa => "Risa",
            Self::Grito => "Grito",
            Self::Llanto => "Llanto",
        }
    }

    pub const fn instruction(self) -> &'static str {
        match self {
            Self::Pausa => "Insert a distinct silence of approximately 2 seconds.",
            Self::Risa => "Perform a laugh appropriate to the context.",
            Self::Grito => "Speak the phrase forcefully and loudly.",
            Self::Llanto => "Make a crying sound or speak with a crying tone.",
        }
    }

    pub fn all() -> &'static [Self] {
        Self::VARIANTS
    }
}

/// System-level instruction describing the delivery and the tag legend
pub fn system_instruction(params: &SpeechParameters, voice: &VoiceOption) -> String {
    let tags: String = SpecialTag::all()
        .iter()
        .map(|tag| format!("- {}: {}\n", tag.tag(), tag.instruction()))
        .collect();

    format!(
        "Act as a professional Spanish Text-to-Speech engine.

Parameters:
- Accent: {accent}
- Style: {style}
- Voice Personality: {personality}
- Speed Level: {speed} (0.5 is slow, 1.0 is normal, 2.0 is fast)
- Pitch Level: {pitch} (Lower is deeper, Higher is more acute)

Tags Handling:
{tags}
Your goal is to generate high-quality audio that matches these parameters.
Read the provided text clearly.",
        accent = params.accent,
        style = params.style,
        personality = voice.personality(),
        speed = params.speed,
        pitch = params.pitch,
    )
}

/// User prompt: the parameters restated inline, then the literal text
pub fn user_prompt(params: &SpeechParameters) -> String {
    format!(
        "[Instruction: Speak with a {} accent. Style: {}. Speed: {}. Pitch: {}.]\n{}",
        params.accent, params.style, params.speed, params.pitch, params.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::catalog::VoiceCatalog;
    use crate::speech::params::{Accent, Style};

    fn params() -> SpeechParameters {
        SpeechParameters::new("Hola [risa] mundo [pausa]")
            .with_voice("v8")
            .with_accent(Accent::Argentina)
            .with_style(Style::Susurrar)
            .with_speed(1.5)
            .with_pitch(-3.0)
    }

    #[test]
    fn test_system_instruction_mentions_parameters() {
        let catalog = VoiceCatalog::default();
        let voice = catalog.resolve("v8").unwrap();
        let instruction = system_instruction(&params(), voice);

        assert!(instruction.starts_with("Act as a professional Spanish Text-to-Speech engine."));
        assert!(instruction.contains("- Accent: Argentina\n"));
        assert!(instruction.contains("- Style: Susurrar\n"));
        assert!(instruction.contains("- Voice Personality: Soft and gentle\n"));
        assert!(instruction.contains("- Speed Level: 1.5 (0.5 is slow"));
        assert!(instruction.contains("- Pitch Level: -3 (Lower is deeper"));
    }

    #[test]
    fn test_system_instruction_lists_every_tag() {
        let catalog = VoiceCatalog::default();
        let instruction = system_instruction(&params(), catalog.resolve("v1").unwrap());

        for tag in SpecialTag::all() {
            assert!(
                instruction.contains(&format!("- {}: {}", tag.tag(), tag.instruction())),
                "missing {}",
                tag.label()
            );
        }
    }

    #[test]
    fn test_user_prompt_keeps_text_verbatim() {
        let prompt = user_prompt(&params());
        assert_eq!(
            prompt,
            "[Instruction: Speak with a Argentina accent. Style: Susurrar. Speed: 1.5. Pitch: -3.]\nHola [risa] mundo [pausa]"
        );
    }

    #[test]
    fn test_whole_numbers_render_without_decimals() {
        let prompt = user_prompt(&SpeechParameters::new("x"));
        assert!(prompt.contains("Speed: 1. Pitch: 0."));
    }
}
