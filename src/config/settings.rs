use crate::ao::AoSlot;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

const SETTINGS_FILE: &str = "animation_override.toml";
const SETTINGS_PATH_ENV: &str = "SLV_AO_SETTINGS";

pub const DEFAULT_STAND_INTERVAL_SECS: f32 = 20.0;
pub const MIN_STAND_INTERVAL_SECS: f32 = 1.0;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings serialize failed: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Settings parse failed: {0}")]
    Deserialize(#[from] toml::de::Error),
}

// =============================================================================
// Animation Override Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AoSettings {
    pub enabled: bool,
    pub sits_enabled: bool,
    pub stand_interval_secs: f32,
    pub randomize_stands: bool,
    pub no_stands_in_mouselook: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_notecard_id: Option<Uuid>,
    /// Saved per-slot animation names, keyed by [`AoSlot::setting_key`].
    pub default_animations: BTreeMap<String, String>,
}

impl Default for AoSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            sits_enabled: true,
            stand_interval_secs: DEFAULT_STAND_INTERVAL_SECS,
            randomize_stands: false,
            no_stands_in_mouselook: true,
            config_notecard_id: None,
            default_animations: BTreeMap::new(),
        }
    }
}

impl AoSettings {
    /// Stand cycle period, clamped to a sane minimum.
    pub fn stand_interval(&self) -> Duration {
        let secs = self.stand_interval_secs;
        if secs.is_finite() && secs >= MIN_STAND_INTERVAL_SECS {
            Duration::from_secs_f32(secs)
        } else {
            Duration::from_secs_f32(MIN_STAND_INTERVAL_SECS)
        }
    }

    pub fn default_animation(&self, slot: AoSlot) -> Option<&str> {
        self.default_animations
            .get(slot.setting_key())
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn set_default_animation(&mut self, slot: AoSlot, name: impl Into<String>) {
        self.default_animations
            .insert(slot.setting_key().to_string(), name.into());
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        Ok(toml::from_str(&data)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml = toml::to_string_pretty(self)?;
        fs::write(path, toml)?;
        debug!("💾 Saved animation override settings to {}", path.display());
        Ok(())
    }
}

/// Settings file location: `SLV_AO_SETTINGS` or the per-user config dir.
pub fn settings_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(SETTINGS_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from("com", "slv", "slv-ao")
        .map(|proj| proj.config_dir().join(SETTINGS_FILE))
}

pub fn save_settings(settings: &AoSettings) -> Result<(), SettingsError> {
    if let Some(path) = settings_path() {
        settings.save_to(&path)?;
    }
    Ok(())
}

/// Load saved settings, falling back to defaults when missing or unreadable.
pub fn load_settings() -> AoSettings {
    let Some(path) = settings_path() else {
        return AoSettings::default();
    };
    match AoSettings::load_from(&path) {
        Ok(settings) => settings,
        Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            AoSettings::default()
        }
        Err(e) => {
            warn!("Ignoring unreadable settings at {}: {}", path.display(), e);
            AoSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stand_interval_is_clamped() {
        let mut settings = AoSettings::default();
        assert_eq!(settings.stand_interval(), Duration::from_secs(20));

        settings.stand_interval_secs = 0.0;
        assert_eq!(settings.stand_interval(), Duration::from_secs(1));

        settings.stand_interval_secs = f32::NAN;
        assert_eq!(settings.stand_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_empty_default_name_is_unset() {
        let mut settings = AoSettings::default();
        settings.set_default_animation(AoSlot::Walk, "");
        assert_eq!(settings.default_animation(AoSlot::Walk), None);

        settings.set_default_animation(AoSlot::Walk, "Strut");
        assert_eq!(settings.default_animation(AoSlot::Walk), Some("Strut"));
        assert_eq!(settings.default_animation(AoSlot::Run), None);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: AoSettings = toml::from_str("enabled = true\n").unwrap();
        assert!(settings.enabled);
        assert!(settings.sits_enabled);
        assert_eq!(settings.stand_interval_secs, DEFAULT_STAND_INTERVAL_SECS);
    }
}
