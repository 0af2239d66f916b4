#![allow(dead_code)]

use async_trait::async_trait;
use slv_ao::ao::{
    AnimationRequest, AnimationRequester, InventoryItem, InventoryResolver, NotecardFetcher,
    Notifier,
};
use slv_ao::world::AgentState;
use slv_ao::{AoCollaborators, AoEngine, AoSettings, AssetId, FetchError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub fn id(n: u128) -> Uuid {
    Uuid::from_u128(0xa0a0_0000_0000_4000_8000_0000_0000_0000 | n)
}

#[derive(Default)]
pub struct RecordingRequester {
    calls: Mutex<Vec<(AssetId, AnimationRequest)>>,
}

impl RecordingRequester {
    pub fn calls(&self) -> Vec<(AssetId, AnimationRequest)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn take(&self) -> Vec<(AssetId, AnimationRequest)> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }
}

impl AnimationRequester for RecordingRequester {
    fn request_animation(&self, animation_id: AssetId, request: AnimationRequest) {
        self.calls.lock().unwrap().push((animation_id, request));
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub struct FakeInventory {
    pub fetched: AtomicBool,
    items: Mutex<HashMap<Uuid, InventoryItem>>,
    animations: Mutex<HashMap<(Uuid, String), AssetId>>,
}

impl FakeInventory {
    pub fn new() -> Self {
        Self {
            fetched: AtomicBool::new(true),
            items: Mutex::new(HashMap::new()),
            animations: Mutex::new(HashMap::new()),
        }
    }

    pub fn add_item(&self, item: InventoryItem) {
        self.items.lock().unwrap().insert(item.item_id, item);
    }

    pub fn add_animation(&self, folder_id: Uuid, name: &str, asset_id: AssetId) {
        self.animations
            .lock()
            .unwrap()
            .insert((folder_id, name.to_string()), asset_id);
    }

    pub fn set_fetched(&self, fetched: bool) {
        self.fetched.store(fetched, Ordering::SeqCst);
    }
}

impl InventoryResolver for FakeInventory {
    fn is_everything_fetched(&self) -> bool {
        self.fetched.load(Ordering::SeqCst)
    }

    fn item(&self, item_id: Uuid) -> Option<InventoryItem> {
        self.items.lock().unwrap().get(&item_id).cloned()
    }

    fn find_animation(&self, folder_id: Uuid, name: &str) -> Option<AssetId> {
        self.animations
            .lock()
            .unwrap()
            .get(&(folder_id, name.to_string()))
            .copied()
    }
}

/// Hands out a fixed fetch result.
pub struct StaticFetcher {
    pub result: Result<String, FetchError>,
}

impl StaticFetcher {
    pub fn text(text: &str) -> Self {
        Self {
            result: Ok(text.to_string()),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl NotecardFetcher for StaticFetcher {
    async fn fetch_notecard(&self, _item: &InventoryItem) -> Result<String, FetchError> {
        self.result.clone()
    }
}

pub struct Harness {
    pub engine: AoEngine,
    pub requests: Arc<RecordingRequester>,
    pub agent: Arc<AgentState>,
    pub inventory: Arc<FakeInventory>,
    pub notifier: Arc<RecordingNotifier>,
    pub folder: Uuid,
    pub notecard: InventoryItem,
}

pub fn settings(enabled: bool) -> AoSettings {
    AoSettings {
        enabled,
        ..AoSettings::default()
    }
}

/// Engine wired to recording doubles, with a notecard item in `folder`.
pub fn harness_with(settings: AoSettings) -> Harness {
    let requests = Arc::new(RecordingRequester::default());
    let agent = Arc::new(AgentState::new());
    let inventory = Arc::new(FakeInventory::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let folder = id(0xf0);

    let notecard = InventoryItem {
        item_id: id(0xc0),
        asset_id: Some(id(0xc1)),
        parent_folder_id: folder,
        name: "AO Config".to_string(),
        can_copy: true,
    };
    inventory.add_item(notecard.clone());

    let host = AoCollaborators {
        animations: requests.clone(),
        avatar: agent.clone(),
        inventory: inventory.clone(),
        notifier: notifier.clone(),
    };
    let mut engine = AoEngine::new(host, settings).with_rng_seed(7);
    engine.set_config_folder(Some(folder));

    Harness {
        engine,
        requests,
        agent,
        inventory,
        notifier,
        folder,
        notecard,
    }
}

pub fn harness(enabled: bool) -> Harness {
    harness_with(settings(enabled))
}

pub fn start(id: AssetId) -> (AssetId, AnimationRequest) {
    (id, AnimationRequest::Start)
}

pub fn stop(id: AssetId) -> (AssetId, AnimationRequest) {
    (id, AnimationRequest::Stop)
}
