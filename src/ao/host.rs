//! Narrow interfaces the overrider uses to talk to the rest of the viewer.
//!
//! Every collaborator is `Send + Sync` so an engine can sit behind an
//! [`AoEngineHandle`](super::AoEngineHandle) and be driven from tokio tasks.

use super::{AssetId, FetchError};
use async_trait::async_trait;
use uuid::Uuid;

/// Start or stop an animation on the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationRequest {
    Start,
    Stop,
}

impl AnimationRequest {
    pub fn from_start(start: bool) -> Self {
        if start {
            AnimationRequest::Start
        } else {
            AnimationRequest::Stop
        }
    }
}

/// Fire-and-forget animation requests to the avatar's animation system.
pub trait AnimationRequester: Send + Sync {
    fn request_animation(&self, animation_id: AssetId, request: AnimationRequest);
}

/// Instantaneous queries of the avatar's kinematic and camera state.
pub trait AvatarStatus: Send + Sync {
    fn is_sitting(&self) -> bool;
    fn is_flying(&self) -> bool;
    fn in_mouselook(&self) -> bool;
    fn is_logged_in(&self) -> bool {
        true
    }
}

/// Inventory item metadata needed to locate and read a notecard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub item_id: Uuid,
    pub asset_id: Option<AssetId>,
    pub parent_folder_id: Uuid,
    pub name: String,
    pub can_copy: bool,
}

/// Inventory lookups, treated as a black box.
pub trait InventoryResolver: Send + Sync {
    fn is_everything_fetched(&self) -> bool;

    fn item(&self, item_id: Uuid) -> Option<InventoryItem>;

    /// Asset id of the item named `name` directly inside `folder_id`.
    fn find_animation(&self, folder_id: Uuid, name: &str) -> Option<AssetId>;
}

/// Asynchronous notecard download and decode.
#[async_trait]
pub trait NotecardFetcher: Send + Sync {
    async fn fetch_notecard(&self, item: &InventoryItem) -> Result<String, FetchError>;
}

/// User-visible notification sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that only logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("💬 {}", message);
    }
}
