use crate::settings::manager::SettingsManager;
use crate::settings::{ProviderConfig, Settings};
use crate::speech::params::{Accent, Style};
use tempfile::TempDir;

#[test]
fn test_creates_default_file_when_missing() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("nested").join("settings.toml");

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();

    assert!(settings_path.exists());
    let settings = manager.settings();
    assert_eq!(settings.defaults.voice_id, "v1");
    assert_eq!(settings.output.filename_prefix, "vozgenius");
    assert!(matches!(
        settings.provider,
        ProviderConfig::Gemini { api_key: None, .. }
    ));
}

#[test]
fn test_reads_partial_file_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");
    std::fs::write(
        &settings_path,
        r#"
[provider]
type = "gemini"
api_key = "secret"
timeout_secs = 30

[defaults]
voice_id = "v7"
accent = "mexico"
style = "storyteller"
speed = 1.25
"#,
    )
    .unwrap();

    let settings = SettingsManager::from_path(settings_path).unwrap().settings();

    match settings.provider {
        ProviderConfig::Gemini {
            api_key,
            model,
            timeout_secs,
            ..
        } => {
            assert_eq!(api_key.as_deref(), Some("secret"));
            assert_eq!(model, "gemini-2.5-flash-preview-tts");
            assert_eq!(timeout_secs, 30);
        }
        other => panic!("unexpected provider: {other:?}"),
    }
    assert_eq!(settings.defaults.voice_id, "v7");
    assert_eq!(settings.defaults.accent, Accent::Mexico);
    assert_eq!(settings.defaults.style, Style::Storyteller);
    assert_eq!(settings.defaults.speed, 1.25);
    assert_eq!(settings.defaults.pitch, 0.0);
}

#[test]
fn test_corrupt_file_is_backed_up() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");
    std::fs::write(&settings_path, "this is = = not toml").unwrap();

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();

    let backup = temp_dir.path().join("settings.toml.backup");
    assert!(backup.exists());
    assert_eq!(
        std::fs::read_to_string(backup).unwrap(),
        "this is = = not toml"
    );
    assert_eq!(manager.settings().defaults.voice_id, "v1");

    let rewritten = std::fs::read_to_string(&settings_path).unwrap();
    assert!(toml::from_str::<Settings>(&rewritten).is_ok());
}

#[test]
fn test_update_is_in_memory_until_saved() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("settings.toml");
    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();

    manager.update_setting(|settings| settings.defaults.style = Style::Triste);
    assert_eq!(manager.settings().defaults.style, Style::Triste);

    let reloaded = SettingsManager::from_path(settings_path.clone()).unwrap();
    assert_eq!(reloaded.settings().defaults.style, Style::Natural);

    manager.save().unwrap();
    let reloaded = SettingsManager::from_path(settings_path).unwrap();
    assert_eq!(reloaded.settings().defaults.style, Style::Triste);
}

#[test]
fn test_defaults_build_parameters() {
    let mut settings = Settings::default();
    settings.defaults.accent = Accent::Argentina;
    settings.defaults.pitch = -2.0;

    let params = settings.defaults.parameters("Hola");
    assert_eq!(params.text, "Hola");
    assert_eq!(params.voice_id, "v1");
    assert_eq!(params.accent, Accent::Argentina);
    assert_eq!(params.pitch, -2.0);
}

#[test]
fn test_mock_provider_config_round_trips() {
    let mut settings = Settings::default();
    settings.provider = ProviderConfig::Mock {
        behavior: crate::tts::mock::MockBehavior::EmptyResponse,
    };

    let contents = toml::to_string_pretty(&settings).unwrap();
    let parsed: Settings = toml::from_str(&contents).unwrap();
    assert!(matches!(
        parsed.provider,
        ProviderConfig::Mock {
            behavior: crate::tts::mock::MockBehavior::EmptyResponse
        }
    ));
}
