//! Client-side animation overrider.
//!
//! Watches the avatar's stock movement animations and substitutes the
//! user's configured replacements, cycling idle stands on a timer. The
//! configuration comes from a notecard parsed into an [`OverrideTable`] and a
//! [`StandRotation`].

pub mod choices;
pub mod engine;
pub mod host;
pub mod loader;
pub mod notecard;
pub mod overrides;
pub mod stands;
pub mod state;
pub mod stock;
pub mod timer;
pub mod tokens;

use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

pub use choices::{ChoiceList, SlotChoices};
pub use engine::{AoCollaborators, AoEngine, ConfigStatus, MovementEvent, StandChange};
pub use host::{
    AnimationRequest, AnimationRequester, AvatarStatus, InventoryItem, InventoryResolver,
    LogNotifier, NotecardFetcher, Notifier,
};
pub use loader::{load_configuration, load_when_inventory_ready, LoadReport, NotecardRequest};
pub use notecard::{Assignment, ParseResult};
pub use overrides::{OverrideEntry, OverrideTable};
pub use stands::{StandEntry, StandRotation, Step};
pub use state::{AoSlot, MovementState};
pub use timer::{spawn_stand_driver, InventoryGate, StandTimer};

/// Asset identifier of an animation.
pub type AssetId = Uuid;

/// Shared engine for callers that drive it from more than one task.
///
/// The engine, its override table and its stand list are guarded together.
pub type AoEngineHandle = Arc<tokio::sync::Mutex<AoEngine>>;

pub fn create_engine_handle(engine: AoEngine) -> AoEngineHandle {
    Arc::new(tokio::sync::Mutex::new(engine))
}

/// Failures fetching or decoding a notecard asset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Notecard asset is missing")]
    Missing,

    #[error("Permission denied reading notecard")]
    PermissionDenied,

    #[error("Notecard decode failed: {reason}")]
    Decode { reason: String },

    #[error("Asset transfer failed: {reason}")]
    Transport { reason: String },
}

/// Animation overrider errors. None of these ever reach the avatar's
/// animation dispatch; they only surface from configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AoError {
    #[error("No configuration notecard set")]
    ConfigNotSet,

    #[error("Inventory has not finished loading")]
    InventoryNotReady,

    #[error("Configuration notecard {item_id} is not in this inventory")]
    ItemNotFound { item_id: Uuid },

    #[error("No copy permission on notecard '{name}'")]
    PermissionDenied { name: String },

    #[error("Notecard '{name}' has no asset")]
    MissingAsset { name: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

pub type AoResult<T> = Result<T, AoError>;
