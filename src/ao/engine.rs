//! Animation override state machine.
//!
//! The engine tracks one current [`MovementState`] and reacts to the avatar's
//! stock animations starting and stopping, to sit and fly transitions and to
//! stand timer ticks. Every lookup miss falls through to "do nothing" so the
//! avatar's own animation system is never blocked; the engine only adds or
//! substitutes requests.

use super::host::{AnimationRequest, AnimationRequester, AvatarStatus, InventoryItem, InventoryResolver, Notifier};
use super::stands::Step;
use super::{
    AoSlot, AssetId, MovementState, OverrideTable, SlotChoices, StandRotation, StandTimer,
};
use crate::config::AoSettings;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// The viewer-side collaborators the engine talks to.
#[derive(Clone)]
pub struct AoCollaborators {
    pub animations: Arc<dyn AnimationRequester>,
    pub avatar: Arc<dyn AvatarStatus>,
    pub inventory: Arc<dyn InventoryResolver>,
    pub notifier: Arc<dyn Notifier>,
}

/// Outcome of a stand change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandChange {
    /// A stand animation was (re)started.
    Changed,
    /// Nothing to do: disabled, no stands, or a higher priority state is active.
    NotApplicable,
    /// The avatar is sitting, or in mouselook with stands suppressed there.
    Blocked,
}

/// Signals from the avatar that can move the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementEvent {
    SitChanged { sitting: bool, on_ground: bool },
    FlyChanged { flying: bool },
    MotionStarted { animation_id: AssetId },
    MotionStopped { animation_id: AssetId },
}

/// What the configuration notecard setting currently points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigStatus {
    NotLoggedIn,
    NotSet,
    Set { name: String },
    NotOnAccount,
}

impl fmt::Display for ConfigStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigStatus::NotLoggedIn => write!(f, "Not logged in"),
            ConfigStatus::NotSet => write!(f, "Currently not set"),
            ConfigStatus::Set { name } => write!(f, "Currently set to: {}", name),
            ConfigStatus::NotOnAccount => write!(f, "Currently set to a item not on this account"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StandPick {
    /// Move to the next stand (or a random one) before playing.
    Rotate,
    /// Replay the stand under the cursor.
    Current,
}

/// One animation overrider per session.
pub struct AoEngine {
    pub(super) host: AoCollaborators,
    pub(super) settings: AoSettings,
    pub(super) overrides: OverrideTable,
    pub(super) stands: StandRotation,
    pub(super) choices: SlotChoices,
    pub(super) state: MovementState,
    pub(super) current_stand: Option<AssetId>,
    pub(super) config_folder: Option<Uuid>,
    stand_timer: Option<StandTimer>,
    rng: StdRng,
}

impl AoEngine {
    pub fn new(host: AoCollaborators, settings: AoSettings) -> Self {
        info!("🎭 Animation overrider created (enabled: {})", settings.enabled);
        Self {
            host,
            settings,
            overrides: OverrideTable::new(),
            stands: StandRotation::new(),
            choices: SlotChoices::new(),
            state: MovementState::Idle,
            current_stand: None,
            config_folder: None,
            stand_timer: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a fixed seed for random stand selection.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// Current movement state as last recorded.
    pub fn state(&self) -> MovementState {
        self.state
    }

    pub fn current_stand(&self) -> Option<AssetId> {
        self.current_stand
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    pub fn overrides_mut(&mut self) -> &mut OverrideTable {
        &mut self.overrides
    }

    pub fn stands(&self) -> &StandRotation {
        &self.stands
    }

    pub fn stands_mut(&mut self) -> &mut StandRotation {
        &mut self.stands
    }

    pub fn choices(&self) -> &SlotChoices {
        &self.choices
    }

    pub fn settings(&self) -> &AoSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut AoSettings {
        &mut self.settings
    }

    /// Folder animation names are resolved in; set by a successful load.
    pub fn config_folder(&self) -> Option<Uuid> {
        self.config_folder
    }

    pub fn set_config_folder(&mut self, folder_id: Option<Uuid>) {
        self.config_folder = folder_id;
    }

    pub fn stand_timer(&self) -> Option<&StandTimer> {
        self.stand_timer.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    /// Re-derive the current state from the avatar: sitting forces the sit
    /// family, flying forces the hover family, otherwise the recorded state
    /// stands.
    pub fn animation_state(&mut self) -> MovementState {
        let avatar = &self.host.avatar;
        if avatar.is_sitting() {
            if !self.state.is_sitting() {
                self.state = MovementState::Sit;
            }
        } else if avatar.is_flying() && !self.state.is_airborne() {
            self.state = MovementState::Hover;
        }
        self.state
    }

    // ---------------------------------------------------------------------
    // Collaborator glue
    // ---------------------------------------------------------------------

    pub(super) fn request(&self, animation_id: AssetId, request: AnimationRequest) {
        debug!("🎭 {:?} animation {}", request, animation_id);
        self.host.animations.request_animation(animation_id, request);
    }

    pub(super) fn notify(&self, message: &str) {
        self.host.notifier.notify(message);
    }

    /// Resolve an animation name in the configured folder.
    pub fn resolve_name(&self, name: &str) -> Option<AssetId> {
        self.resolve_in(self.config_folder?, name)
    }

    pub(super) fn resolve_in(&self, folder_id: Uuid, name: &str) -> Option<AssetId> {
        if name.is_empty() || !self.host.inventory.is_everything_fetched() {
            return None;
        }
        self.host.inventory.find_animation(folder_id, name)
    }

    // ---------------------------------------------------------------------
    // Motion entry points
    // ---------------------------------------------------------------------

    /// Single entry point for everything the avatar reports.
    /// Returns whether the engine acted on the event.
    pub fn observe(&mut self, event: MovementEvent) -> bool {
        match event {
            MovementEvent::MotionStarted { animation_id } => self.start_motion(animation_id, false),
            MovementEvent::MotionStopped { animation_id } => self.stop_motion(animation_id, false),
            MovementEvent::SitChanged { sitting: true, on_ground } => {
                let target = if on_ground {
                    MovementState::GroundSit
                } else {
                    MovementState::Sit
                };
                self.force_state(target)
            }
            MovementEvent::SitChanged { sitting: false, .. } => {
                self.release_state(MovementState::is_sitting)
            }
            MovementEvent::FlyChanged { flying: true } => {
                if self.state.is_airborne() {
                    false
                } else {
                    self.force_state(MovementState::Hover)
                }
            }
            MovementEvent::FlyChanged { flying: false } => {
                self.release_state(MovementState::is_airborne)
            }
        }
    }

    /// A stock animation started. With `is_stand` the id is a stand override
    /// and is requested directly unless the avatar sits.
    ///
    /// Returns true when the engine handled the animation.
    pub fn start_motion(&mut self, animation_id: AssetId, is_stand: bool) -> bool {
        if is_stand {
            if self.host.avatar.is_sitting() {
                return false;
            }
            self.request(animation_id, AnimationRequest::Start);
            return true;
        }

        let Some(override_id) = self.overrides.override_for(animation_id) else {
            return false;
        };
        if !self.settings.enabled {
            return false;
        }

        if let Some(stand) = self.current_stand {
            self.stop_motion(stand, true);
        }
        let state = self.overrides.state_for(animation_id);
        self.state = state;
        debug!("🎭 State -> {} (stock {} -> override {})", state, animation_id, override_id);

        if state == MovementState::Sit && !self.settings.sits_enabled {
            return true;
        }
        self.request(override_id, AnimationRequest::Start);
        true
    }

    /// A stock animation stopped. With `is_stand` the id is the stand
    /// override to stop.
    pub fn stop_motion(&mut self, animation_id: AssetId, is_stand: bool) -> bool {
        if is_stand {
            self.state = MovementState::Idle;
            self.request(animation_id, AnimationRequest::Stop);
            return true;
        }

        let Some(override_id) = self.overrides.override_for(animation_id) else {
            return false;
        };
        if !self.settings.enabled {
            return false;
        }

        if self.animation_state() == self.overrides.state_for(animation_id) {
            self.state = MovementState::Idle;
        }
        self.play_stand(StandPick::Current);
        self.request(override_id, AnimationRequest::Stop);
        true
    }

    /// Enter a state imposed by the avatar (sitting down, taking off).
    fn force_state(&mut self, target: MovementState) -> bool {
        let previous = self.state;
        if previous == target {
            return false;
        }
        let enabled = self.settings.enabled;

        if enabled {
            if previous.is_standing() {
                if let Some(stand) = self.current_stand {
                    self.request(stand, AnimationRequest::Stop);
                }
            } else if let Some(running) = self.overrides.override_for_state(previous) {
                self.request(running, AnimationRequest::Stop);
            }
        }

        self.state = target;
        info!("🎭 State forced {} -> {}", previous, target);

        let suppressed = target == MovementState::Sit && !self.settings.sits_enabled;
        if enabled && !suppressed {
            if let Some(override_id) = self.overrides.override_for_state(target) {
                self.request(override_id, AnimationRequest::Start);
            }
        }
        true
    }

    /// Leave a state family imposed by the avatar and resume standing.
    fn release_state(&mut self, family: fn(MovementState) -> bool) -> bool {
        let previous = self.state;
        if !family(previous) {
            return false;
        }
        if self.settings.enabled {
            if let Some(running) = self.overrides.override_for_state(previous) {
                self.request(running, AnimationRequest::Stop);
            }
        }
        self.state = MovementState::Idle;
        info!("🎭 State released {} -> {}", previous, self.state);
        self.play_stand(StandPick::Current);
        true
    }

    // ---------------------------------------------------------------------
    // Stands
    // ---------------------------------------------------------------------

    /// Move to the next stand (random when configured) and play it.
    pub fn change_stand(&mut self) -> StandChange {
        self.play_stand(StandPick::Rotate)
    }

    pub fn next_stand(&mut self) -> StandChange {
        self.step_stand(Step::Next)
    }

    pub fn previous_stand(&mut self) -> StandChange {
        self.step_stand(Step::Previous)
    }

    /// Put the stand cursor on `index` and play that stand.
    pub fn select_stand(&mut self, index: usize) -> StandChange {
        if self.stands.is_empty() {
            return StandChange::NotApplicable;
        }
        self.stands.select(index);
        self.announce_stand();
        self.play_stand(StandPick::Current)
    }

    fn step_stand(&mut self, step: Step) -> StandChange {
        if self.stands.is_empty() {
            return StandChange::NotApplicable;
        }
        self.stands.advance(step);
        self.announce_stand();
        self.play_stand(StandPick::Current)
    }

    fn announce_stand(&self) {
        if let Some(entry) = self.stands.current() {
            self.notify(&format!("Changing stand to {}.", entry.display_name));
        }
    }

    fn play_stand(&mut self, pick: StandPick) -> StandChange {
        if !self.settings.enabled {
            return StandChange::NotApplicable;
        }
        let avatar = Arc::clone(&self.host.avatar);
        if self.settings.no_stands_in_mouselook && avatar.in_mouselook() {
            return StandChange::Blocked;
        }
        if avatar.is_sitting() {
            return StandChange::Blocked;
        }
        // Stands have the lowest priority.
        if !self.animation_state().is_standing() || self.stands.is_empty() {
            return StandChange::NotApplicable;
        }

        // Rotating away from the cursor stops its stand even if nothing was
        // recorded as playing yet.
        let previous = match pick {
            StandPick::Rotate => self
                .current_stand
                .or_else(|| self.stands.current().map(|e| e.override_animation_id)),
            StandPick::Current => self.current_stand,
        };

        if pick == StandPick::Rotate {
            if self.settings.randomize_stands {
                self.stands.randomize_with(&mut self.rng);
            } else {
                self.stands.advance(Step::Next);
            }
        }
        let Some(next) = self.stands.current().map(|e| e.override_animation_id) else {
            return StandChange::NotApplicable;
        };

        if let Some(previous) = previous {
            self.stop_motion(previous, true);
        }
        self.start_motion(next, true);
        self.state = MovementState::Stand;
        self.current_stand = Some(next);
        debug!("🎭 Stand {} of {} playing", self.stands.cursor() + 1, self.stands.len());
        StandChange::Changed
    }

    /// Advance the stand timer; fires a stand change when it is due.
    pub fn tick(&mut self, now: Instant) -> Option<StandChange> {
        let due = self.stand_timer.as_mut().map(|t| t.poll(now)).unwrap_or(false);
        if due {
            Some(self.change_stand())
        } else {
            None
        }
    }

    // ---------------------------------------------------------------------
    // Re-sync and settings
    // ---------------------------------------------------------------------

    /// Re-sync after the overrider or the sit override is toggled.
    pub fn run(&mut self) {
        let previous = self.state;
        let avatar = Arc::clone(&self.host.avatar);
        // A sit or flight the avatar is still in keeps its exact variant.
        let still_current = (previous.is_sitting() && avatar.is_sitting())
            || (previous.is_airborne() && avatar.is_flying());
        self.state = if still_current {
            previous
        } else {
            MovementState::Idle
        };
        let state = self.animation_state();

        if !self.settings.enabled && previous != state && !previous.is_standing() {
            if let Some(running) = self.overrides.override_for_state(previous) {
                self.request(running, AnimationRequest::Stop);
            }
        }

        if state.is_standing() {
            if self.settings.enabled {
                let period = self.settings.stand_interval();
                let now = Instant::now();
                match self.stand_timer.as_mut() {
                    Some(timer) => timer.reset(period, now),
                    None => self.stand_timer = Some(StandTimer::new(period, now)),
                }
                self.play_stand(StandPick::Current);
            } else {
                if let Some(stand) = self.current_stand.take() {
                    self.stop_motion(stand, true);
                }
                self.state = MovementState::Idle;
            }
        } else if let Some(override_id) = self.overrides.override_for_state(state) {
            let start = self.settings.enabled
                && (state != MovementState::Sit || self.settings.sits_enabled);
            self.request(override_id, AnimationRequest::from_start(start));
        }
        info!("🎭 Overrider re-synced in state {}", self.state);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        info!("🎭 Animation overrider {}", if enabled { "enabled" } else { "disabled" });
        self.settings.enabled = enabled;
        self.run();
    }

    pub fn set_sits_enabled(&mut self, enabled: bool) {
        self.settings.sits_enabled = enabled;
        self.run();
    }

    pub fn set_stand_interval(&mut self, secs: f32) {
        self.settings.stand_interval_secs = secs;
        let period = self.settings.stand_interval();
        if let Some(timer) = self.stand_timer.as_mut() {
            timer.reset(period, Instant::now());
        }
    }

    pub fn set_randomize_stands(&mut self, randomize: bool) {
        self.settings.randomize_stands = randomize;
    }

    pub fn set_no_stands_in_mouselook(&mut self, suppress: bool) {
        self.settings.no_stands_in_mouselook = suppress;
    }

    /// The user picked `name` for `slot`.
    ///
    /// Stops the slot's running override, remembers the name as the slot's
    /// default and points every row of the slot's state at it. Sit slots
    /// swap the animation live when the avatar is sitting in that state;
    /// ground sits swap even while the overrider is off.
    pub fn select_override(&mut self, slot: AoSlot, name: &str) -> Option<AssetId> {
        let state = slot.state();
        let animation_id = self.resolve_name(name);

        match slot {
            AoSlot::Sit | AoSlot::GroundSit => {
                let live = (slot != AoSlot::Sit
                    || (self.settings.enabled && self.settings.sits_enabled))
                    && self.host.avatar.is_sitting()
                    && self.animation_state() == state;
                if live {
                    if let Some(old) = self.overrides.override_for(slot.stock_animation()) {
                        self.request(old, AnimationRequest::Stop);
                    }
                    if let Some(new) = animation_id {
                        self.request(new, AnimationRequest::Start);
                    }
                }
            }
            _ => {
                if let Some(old) = self.overrides.override_for(slot.stock_animation()) {
                    self.request(old, AnimationRequest::Stop);
                }
            }
        }

        self.settings.set_default_animation(slot, name);
        self.choices.get_mut(slot).select(name);
        match animation_id {
            Some(id) => self.overrides.set_override(state, id),
            None => {
                self.overrides.clear_override(state);
                self.notify(&format!("Warning: animation '{}' could not be found.", name));
            }
        }
        info!("🎭 {} override set to '{}'", slot, name);
        animation_id
    }

    // ---------------------------------------------------------------------
    // Configuration notecard
    // ---------------------------------------------------------------------

    /// Point the overrider at a dropped notecard.
    pub fn set_config_notecard(&mut self, item: &InventoryItem) -> ConfigStatus {
        self.settings.config_notecard_id = Some(item.item_id);
        info!("🎭 Configuration notecard set to '{}'", item.name);
        ConfigStatus::Set { name: item.name.clone() }
    }

    pub fn config_status(&self) -> ConfigStatus {
        if !self.host.avatar.is_logged_in() {
            return ConfigStatus::NotLoggedIn;
        }
        match self.settings.config_notecard_id {
            None => ConfigStatus::NotSet,
            Some(item_id) => match self.host.inventory.item(item_id) {
                Some(item) => ConfigStatus::Set { name: item.name },
                None => ConfigStatus::NotOnAccount,
            },
        }
    }
}
