//! Overlay configuration persistence.
//!
//! Stores overlay tuning (visible line count, input length cap, key
//! bindings) as JSON at `~/.local/share/overlay-ui/config.json`. Loaded
//! once on startup; saved on every change so the file is always current.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::keybinds::KeyBindings;

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("overlay-ui")
        .join("config.json")
}

/// Persisted overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlaySettings {
    /// Most recent messages ever rendered, regardless of log length.
    #[serde(default = "default_messages_shown")]
    pub messages_shown: usize,
    /// Character cap applied at the input field.
    #[serde(default = "default_max_input_len")]
    pub max_input_len: usize,
    /// Message history cap; the oldest entry drops past this.
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
    /// Wrap width for message text, in dp units.
    #[serde(default = "default_text_width")]
    pub text_width: f32,
    /// Elapsed-time units for one message slot to fade out.
    #[serde(default = "default_fade_frames")]
    pub fade_frames: f32,
    #[serde(default)]
    pub bindings: KeyBindings,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_messages_shown() -> usize { 10 }
fn default_max_input_len() -> usize { 150 }
fn default_max_messages() -> usize { 120 }
fn default_text_width() -> f32 { 600.0 }
fn default_fade_frames() -> f32 { 180.0 }

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            messages_shown: default_messages_shown(),
            max_input_len: default_max_input_len(),
            max_messages: default_max_messages(),
            text_width: default_text_width(),
            fade_frames: default_fade_frames(),
            bindings: KeyBindings::default(),
            path: default_path(),
        }
    }
}

impl OverlaySettings {
    /// Read settings from an explicit path.
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = default_path();
        let mut settings = Self::read_from(&path).unwrap_or_default();
        settings.path = path;
        settings
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Persist to the path the config was loaded from. Best-effort.
    pub fn save(&self) {
        if let Err(e) = self.save_to(&self.path) {
            tracing::warn!("failed to save overlay config: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybinds::BindAction;

    #[test]
    fn test_defaults() {
        let settings = OverlaySettings::default();
        assert_eq!(settings.messages_shown, 10);
        assert_eq!(settings.max_input_len, 150);
        assert_eq!(settings.fade_frames, 180.0);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut settings = OverlaySettings::default();
        settings.messages_shown = 6;
        settings.bindings.set("T", Some(BindAction::ToggleChat));
        settings.save_to(&path).unwrap();

        let reloaded = OverlaySettings::read_from(&path).unwrap();
        assert_eq!(reloaded.messages_shown, 6);
        assert_eq!(reloaded.bindings.action_for("T"), Some(BindAction::ToggleChat));
        // untouched fields fall back to serde defaults
        assert_eq!(reloaded.max_input_len, 150);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"messages_shown": 4}"#).unwrap();

        let settings = OverlaySettings::read_from(&path).unwrap();
        assert_eq!(settings.messages_shown, 4);
        assert_eq!(settings.max_messages, 120);
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(OverlaySettings::read_from(&path).is_err());
    }
}
