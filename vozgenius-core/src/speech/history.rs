use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::params::Style;
use crate::audio::wav::suggested_filename;

const PREVIEW_CHARS: usize = 50;

/// Record of one successful generation, shown in the session history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub text: String,
    pub duration_secs: f64,
    pub voice_name: String,
    pub style: Style,
    pub filename: String,
}

impl HistoryEntry {
    pub fn new(
        text: &str,
        duration_secs: f64,
        voice_name: &str,
        style: Style,
        created_at: DateTime<Utc>,
        filename_prefix: &str,
    ) -> Self {
        let timestamp = created_at.timestamp_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp,
            text: preview(text),
            duration_secs,
            voice_name: voice_name.to_string(),
            style,
            filename: suggested_filename(filename_prefix, timestamp),
        }
    }
}

/// First 50 characters, with an ellipsis when the text was cut
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Generations of the current session, newest first
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
    }

    pub fn remove(&mut self, id: &str) -> Option<HistoryEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(text: &str) -> HistoryEntry {
        let at = Utc.timestamp_millis_opt(1_718_000_000_123).unwrap();
        HistoryEntry::new(text, 1.25, "Sofía", Style::Alegre, at, "vozgenius")
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let text = "a".repeat(51);
        assert_eq!(preview(&text), format!("{}...", "a".repeat(50)));
        assert_eq!(preview(&"b".repeat(50)), "b".repeat(50));
        assert_eq!(preview(""), "");
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let text = "ñ".repeat(60);
        assert_eq!(preview(&text), format!("{}...", "ñ".repeat(50)));
    }

    #[test]
    fn test_entry_fields() {
        let entry = entry("Hola");
        assert_eq!(entry.timestamp, 1_718_000_000_123);
        assert_eq!(entry.filename, "vozgenius-1718000000123.wav");
        assert_eq!(entry.voice_name, "Sofía");
        assert_eq!(entry.text, "Hola");
    }

    #[test]
    fn test_newest_first_and_remove() {
        let mut history = SessionHistory::new();
        let first = entry("first");
        let second = entry("second");
        history.record(first.clone());
        history.record(second.clone());

        assert_eq!(history.entries()[0].text, "second");
        assert_eq!(history.remove(&first.id), Some(first.clone()));
        assert_eq!(history.len(), 1);
        assert!(history.remove(&first.id).is_none());
        assert!(history.get(&second.id).is_some());

        history.clear();
        assert!(history.is_empty());
    }
}
