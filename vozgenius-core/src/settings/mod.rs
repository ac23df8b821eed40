pub mod config;
pub mod manager;

#[cfg(test)]
mod tests;

pub use config::{OutputSettings, ProviderConfig, Settings, SpeechDefaults};
pub use manager::SettingsManager;
