// SLV-AO: client-side animation overrider for the SLV viewer

pub mod ao;
pub mod config;
pub mod utils;
pub mod world;

// Re-export commonly used types for convenience
pub use ao::{
    create_engine_handle, load_configuration, spawn_stand_driver, AoCollaborators, AoEngine,
    AoEngineHandle, AoError, AoResult, AoSlot, AssetId, FetchError, MovementEvent,
    MovementState, StandChange,
};
pub use config::{load_settings, save_settings, AoSettings, SettingsError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
