pub mod settings;

// Re-export commonly used types
pub use settings::{
    load_settings, save_settings, settings_path, AoSettings, SettingsError,
    DEFAULT_STAND_INTERVAL_SECS, MIN_STAND_INTERVAL_SECS,
};
