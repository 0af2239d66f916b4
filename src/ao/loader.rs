//! Configuration notecard loading.
//!
//! Loading is split around the asset fetch so the engine lock is never held
//! while a download is in flight: [`AoEngine::begin_load`] validates the
//! configured notecard, the caller fetches it, and
//! [`AoEngine::complete_load`] parses and applies the text in one step.

use super::host::{InventoryItem, NotecardFetcher};
use super::notecard::{self, ParseResult};
use super::{AoEngine, AoEngineHandle, AoError, AoResult, AoSlot, FetchError, InventoryGate};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

const READ_FAILED: &str = "Could not read the specified Config Notecard";

/// A validated notecard waiting to be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotecardRequest {
    pub item: InventoryItem,
}

impl NotecardRequest {
    /// Folder that animation names in the notecard are looked up in.
    pub fn folder_id(&self) -> Uuid {
        self.item.parent_folder_id
    }
}

/// Summary of an applied notecard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub stands: usize,
    pub overrides: usize,
    pub warnings: usize,
}

impl AoEngine {
    /// Check the configured notecard can be read.
    ///
    /// An unset notecard leaves the overrider in pass-through mode and is
    /// not reported to the user. Other failures are.
    pub fn begin_load(&mut self) -> AoResult<NotecardRequest> {
        let result = self.validate_notecard();
        match &result {
            Ok(request) => debug!("📝 Loading configuration notecard '{}'", request.item.name),
            Err(AoError::ConfigNotSet) => debug!("📝 No configuration notecard set"),
            Err(AoError::InventoryNotReady) => debug!("📝 Inventory not ready, deferring load"),
            Err(e) => {
                warn!("Configuration notecard unusable: {}", e);
                self.notify(READ_FAILED);
            }
        }
        result
    }

    fn validate_notecard(&self) -> AoResult<NotecardRequest> {
        let item_id = self.settings.config_notecard_id.ok_or(AoError::ConfigNotSet)?;
        let inventory = &self.host.inventory;
        if !inventory.is_everything_fetched() {
            return Err(AoError::InventoryNotReady);
        }
        let item = inventory
            .item(item_id)
            .ok_or(AoError::ItemNotFound { item_id })?;
        if !item.can_copy {
            return Err(AoError::PermissionDenied { name: item.name });
        }
        if item.asset_id.is_none() {
            return Err(AoError::MissingAsset { name: item.name });
        }
        Ok(NotecardRequest { item })
    }

    /// Apply the fetched notecard. A failed fetch leaves every table as it was.
    pub fn complete_load(
        &mut self,
        request: NotecardRequest,
        fetched: Result<String, FetchError>,
    ) -> AoResult<LoadReport> {
        let text = match fetched {
            Ok(text) => text,
            Err(e) => {
                warn!("Fetching '{}' failed: {}", request.item.name, e);
                self.notify(READ_FAILED);
                return Err(e.into());
            }
        };

        let folder_id = request.folder_id();
        let parsed = notecard::parse(&text, |name| self.resolve_in(folder_id, name));
        self.config_folder = Some(folder_id);
        let report = self.apply_notecard(parsed);
        info!(
            "📝 Loaded '{}': {} stands, {} overrides, {} warnings",
            request.item.name, report.stands, report.overrides, report.warnings
        );
        Ok(report)
    }

    /// Replace the stand list, override table and choice lists with a parse
    /// result, then re-apply saved per-slot defaults and re-sync.
    pub fn apply_notecard(&mut self, parsed: ParseResult) -> LoadReport {
        let report = LoadReport {
            stands: parsed.stands.len(),
            overrides: parsed.assignments.len(),
            warnings: parsed.warnings.len(),
        };

        self.stands.clear();
        self.choices.clear();
        self.overrides.initialize();

        for stand in parsed.stands {
            self.stands.append(stand);
        }
        for assignment in parsed.assignments {
            if let Some(slot) = AoSlot::for_state(assignment.state) {
                self.choices.get_mut(slot).add_or_select(&assignment.name);
            }
            self.overrides
                .set_override(assignment.state, assignment.animation_id);
        }
        for warning in &parsed.warnings {
            self.notify(warning);
        }

        self.apply_defaults();
        self.run();
        report
    }

    /// Saved per-slot choices win over the notecard when they still resolve.
    fn apply_defaults(&mut self) {
        for slot in AoSlot::ALL {
            let state = slot.state();
            let saved = self.settings.default_animation(slot).map(str::to_owned);

            if self.overrides.override_for_state(state).is_none() {
                self.choices.get_mut(slot).clear();
            } else if let Some(name) = &saved {
                self.choices.get_mut(slot).select(name);
            }

            let Some(name) = saved else { continue };
            if let Some(animation_id) = self.resolve_name(&name) {
                debug!("📝 {} default '{}' applied", slot, name);
                self.overrides.set_override(state, animation_id);
            }
        }
    }
}

/// Load the configured notecard into a shared engine.
///
/// The lock is released while the notecard is fetched.
pub async fn load_configuration(
    handle: &AoEngineHandle,
    fetcher: &dyn NotecardFetcher,
) -> AoResult<LoadReport> {
    let request = handle.lock().await.begin_load()?;
    let fetched = fetcher.fetch_notecard(&request.item).await;
    handle.lock().await.complete_load(request, fetched)
}

/// Wait for the inventory to finish loading, then load the notecard once.
pub async fn load_when_inventory_ready(
    handle: &AoEngineHandle,
    fetcher: &dyn NotecardFetcher,
) -> AoResult<LoadReport> {
    let mut gate = InventoryGate::new(Instant::now());
    let mut interval = tokio::time::interval(Duration::from_millis(250));
    loop {
        interval.tick().await;
        let ready = {
            let engine = handle.lock().await;
            let enabled = engine.is_enabled();
            let fetched = engine.host.inventory.is_everything_fetched();
            gate.poll(Instant::now(), enabled, fetched)
        };
        if ready {
            return load_configuration(handle, fetcher).await;
        }
    }
}
