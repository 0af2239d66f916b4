//! ao-replay: load a configuration notecard from disk and run the overrider
//! against a scripted avatar, logging every animation request.
//!
//! Usage: `ao-replay <notecard.txt> <inventory.toml> [seconds]`
//!
//! The inventory file maps animation names to asset ids:
//!
//! ```toml
//! "Strut Walk" = "6c2a3e1b-0000-4000-8000-000000000001"
//! ```

use anyhow::{bail, Context};
use async_trait::async_trait;
use slv_ao::ao::{
    AnimationRequest, AnimationRequester, InventoryItem, InventoryResolver, LogNotifier,
    NotecardFetcher,
};
use slv_ao::utils::logging::{init_logging, log_system_info};
use slv_ao::world::AgentState;
use slv_ao::{
    create_engine_handle, load_configuration, load_settings, spawn_stand_driver, AoCollaborators,
    AoEngine, AssetId, FetchError,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

const DEFAULT_RUN_SECS: u64 = 60;

/// Prints every request instead of animating anything.
struct LoggingAnimationRequester;

impl AnimationRequester for LoggingAnimationRequester {
    fn request_animation(&self, animation_id: AssetId, request: AnimationRequest) {
        info!("🎬 {:?} {}", request, animation_id);
    }
}

/// A flat inventory: one notecard plus the animations next to it.
struct FileInventory {
    notecard: InventoryItem,
    animations: HashMap<String, AssetId>,
}

impl InventoryResolver for FileInventory {
    fn is_everything_fetched(&self) -> bool {
        true
    }

    fn item(&self, item_id: Uuid) -> Option<InventoryItem> {
        (item_id == self.notecard.item_id).then(|| self.notecard.clone())
    }

    fn find_animation(&self, folder_id: Uuid, name: &str) -> Option<AssetId> {
        if folder_id != self.notecard.parent_folder_id {
            return None;
        }
        self.animations.get(name).copied()
    }
}

struct FileNotecardFetcher {
    path: PathBuf,
}

#[async_trait]
impl NotecardFetcher for FileNotecardFetcher {
    async fn fetch_notecard(&self, _item: &InventoryItem) -> Result<String, FetchError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => FetchError::Missing,
                std::io::ErrorKind::PermissionDenied => FetchError::PermissionDenied,
                std::io::ErrorKind::InvalidData => FetchError::Decode {
                    reason: e.to_string(),
                },
                _ => FetchError::Transport {
                    reason: e.to_string(),
                },
            })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    log_system_info();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        bail!("usage: ao-replay <notecard.txt> <inventory.toml> [seconds]");
    }
    let notecard_path = PathBuf::from(&args[1]);
    let inventory_path = PathBuf::from(&args[2]);
    let run_secs = match args.get(3) {
        Some(secs) => secs.parse().context("seconds must be a whole number")?,
        None => DEFAULT_RUN_SECS,
    };

    let listing = tokio::fs::read_to_string(&inventory_path)
        .await
        .with_context(|| format!("Failed to read {}", inventory_path.display()))?;
    let animations: HashMap<String, AssetId> =
        toml::from_str(&listing).context("Inventory listing must map names to asset ids")?;
    info!("📦 {} animations in inventory", animations.len());

    let notecard = InventoryItem {
        item_id: Uuid::new_v4(),
        asset_id: Some(Uuid::new_v4()),
        parent_folder_id: Uuid::new_v4(),
        name: notecard_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "notecard".to_string()),
        can_copy: true,
    };

    let mut settings = load_settings();
    settings.enabled = true;

    let host = AoCollaborators {
        animations: Arc::new(LoggingAnimationRequester),
        avatar: Arc::new(AgentState::new()),
        inventory: Arc::new(FileInventory {
            notecard: notecard.clone(),
            animations,
        }),
        notifier: Arc::new(LogNotifier),
    };
    let mut engine = AoEngine::new(host, settings);
    engine.set_config_notecard(&notecard);
    info!("📝 {}", engine.config_status());

    let handle = create_engine_handle(engine);
    let fetcher = FileNotecardFetcher {
        path: notecard_path,
    };
    let report = load_configuration(&handle, &fetcher).await?;
    info!(
        "📝 {} stands, {} overrides, {} warnings",
        report.stands, report.overrides, report.warnings
    );

    let driver = spawn_stand_driver(Arc::clone(&handle), Duration::from_millis(250));
    tokio::time::sleep(Duration::from_secs(run_secs)).await;
    driver.abort();

    let engine = handle.lock().await;
    info!(
        "🏁 Finished in state {} after {}s",
        engine.state(),
        run_secs
    );
    Ok(())
}
