use slv_ao::ao::AoSlot;
use slv_ao::config::{AoSettings, SettingsError};
use tempfile::TempDir;
use uuid::Uuid;

#[test]
fn test_settings_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("animation_override.toml");

    let mut settings = AoSettings {
        enabled: true,
        sits_enabled: false,
        stand_interval_secs: 45.0,
        randomize_stands: true,
        no_stands_in_mouselook: false,
        config_notecard_id: Some(Uuid::new_v4()),
        ..AoSettings::default()
    };
    settings.set_default_animation(AoSlot::Walk, "Strut");
    settings.set_default_animation(AoSlot::GroundSit, "Cross Legged");

    settings.save_to(&path).unwrap();
    let loaded = AoSettings::load_from(&path).unwrap();

    assert_eq!(loaded, settings);
    assert_eq!(loaded.default_animation(AoSlot::GroundSit), Some("Cross Legged"));
}

#[test]
fn test_unset_notecard_not_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("animation_override.toml");

    AoSettings::default().save_to(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();

    assert!(!text.contains("config_notecard_id"));
    assert_eq!(AoSettings::load_from(&path).unwrap(), AoSettings::default());
}

#[test]
fn test_load_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        AoSettings::load_from(&missing),
        Err(SettingsError::Io(_))
    ));

    let garbled = dir.path().join("garbled.toml");
    std::fs::write(&garbled, "enabled = \"yes please\"").unwrap();
    assert!(matches!(
        AoSettings::load_from(&garbled),
        Err(SettingsError::Deserialize(_))
    ));
}
