use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::{error, info};
use vozgenius_core::audio::AudioContext;
use vozgenius_core::settings::{Settings, SettingsManager};
use vozgenius_core::speech::{
    Accent, SpecialTag, SpeechArtifact, SpeechOrchestrator, SpeechParameters, Style, VoiceCatalog,
};
use vozgenius_core::tts::{create_provider, API_KEY_ENV};

use crate::Args;

pub fn list_voices() {
    let catalog = VoiceCatalog::default();
    println!("{:<5} {:<10} {:<7} {:<7} Personality", "ID", "Name", "Gender", "Voice");
    for voice in catalog.voices() {
        println!(
            "{:<5} {:<10} {:<7} {:<7} {}",
            voice.id,
            voice.name,
            voice.gender,
            voice.api_voice_name,
            voice.personality()
        );
    }
}

pub fn list_tags() {
    for tag in SpecialTag::all() {
        println!("{:<9} {:<7} {}", tag.tag(), tag.label(), tag.instruction());
    }
}

pub async fn generate(args: Args) -> Result<()> {
    if args.play && !cfg!(feature = "playback") {
        bail!("--play requires vozgenius to be built with the `playback` feature");
    }

    let settings_manager = match &args.settings {
        Some(path) => SettingsManager::from_path(path.clone())?,
        None => SettingsManager::new()?,
    };
    let settings = settings_manager.settings();

    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read text from {path:?}"))?,
        (None, None) => bail!("Nothing to say: pass the text or --file <PATH>"),
    };

    let params = build_parameters(&settings, &args, text)?;

    let provider = create_provider(&settings.provider, std::env::var(API_KEY_ENV).ok())?;
    let audio = AudioContext::shared();
    let orchestrator = SpeechOrchestrator::new(provider, audio)
        .with_filename_prefix(settings.output.filename_prefix.clone());

    let artifact = match orchestrator.generate(&params).await {
        Ok(artifact) => artifact,
        Err(e) => {
            error!(error = %e, "Speech generation failed");
            return Err(e).context("Failed to generate audio");
        }
    };

    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| settings.output.directory.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    tokio::fs::create_dir_all(&output_dir)
        .await
        .with_context(|| format!("Failed to create output directory {output_dir:?}"))?;

    let path = output_dir.join(artifact.filename());
    artifact
        .wav
        .save(&path)
        .await
        .with_context(|| format!("Failed to write {path:?}"))?;
    info!(?path, bytes = artifact.wav.len(), "Wrote WAV file");

    print_summary(&artifact, &path);

    if args.play {
        play(&artifact).await?;
    }

    Ok(())
}

fn build_parameters(settings: &Settings, args: &Args, text: String) -> Result<SpeechParameters> {
    let mut params = settings.defaults.parameters(text);

    if let Some(voice) = &args.voice {
        params = params.with_voice(voice.clone());
    }
    if let Some(accent) = &args.accent {
        params = params.with_accent(Accent::try_from(accent.as_str()).map_err(anyhow::Error::msg)?);
    }
    if let Some(style) = &args.style {
        params = params.with_style(Style::try_from(style.as_str()).map_err(anyhow::Error::msg)?);
    }
    if let Some(speed) = args.speed {
        params = params.with_speed(speed);
    }
    if let Some(pitch) = args.pitch {
        params = params.with_pitch(pitch);
    }

    Ok(params)
}

fn print_summary(artifact: &SpeechArtifact, path: &std::path::Path) {
    let created = chrono::DateTime::<chrono::Utc>::from_timestamp_millis(artifact.history.timestamp)
        .map(|at| at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default();

    println!("File:     {}", path.display());
    println!("Voice:    {} ({})", artifact.voice.name, artifact.voice.api_voice_name);
    println!("Style:    {}", artifact.history.style);
    println!("Duration: {:.2}s", artifact.duration_secs);
    println!(
        "Size:     {} bytes ({})",
        artifact.wav.len(),
        artifact.wav.mime_type()
    );
    println!("Created:  {created}");
    println!("Text:     {}", artifact.history.text);
}

#[cfg(feature = "playback")]
async fn play(artifact: &SpeechArtifact) -> Result<()> {
    use vozgenius_core::audio::playback::AudioPlayer;

    let player = AudioPlayer::new()?;
    let playback = player.play(&artifact.buffer)?;
    playback.wait().await;
    Ok(())
}

#[cfg(not(feature = "playback"))]
async fn play(_artifact: &SpeechArtifact) -> Result<()> {
    bail!("--play requires vozgenius to be built with the `playback` feature")
}
