//! Stock animation -> override animation table.

use super::{stock, AssetId, MovementState};
use std::collections::HashMap;
use tracing::debug;

/// One row of the override table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEntry {
    pub stock_animation_id: AssetId,
    pub override_animation_id: Option<AssetId>,
    pub state: MovementState,
}

/// Rows keyed by stock id, with a secondary one-to-many index by state.
///
/// Several stock animations can share a state (the three sit variants all
/// map to `Sit`); a state-wide update touches every one of them.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    rows: HashMap<AssetId, OverrideEntry>,
    /// Stock ids per state, in registration order.
    by_state: HashMap<MovementState, Vec<AssetId>>,
}

const STOCK_ROWS: [(AssetId, MovementState); 21] = [
    (stock::WALK, MovementState::Walk),
    (stock::RUN, MovementState::Run),
    (stock::PRE_JUMP, MovementState::PreJump),
    (stock::JUMP, MovementState::Jump),
    (stock::TURNLEFT, MovementState::TurnLeft),
    (stock::TURNRIGHT, MovementState::TurnRight),
    (stock::SIT, MovementState::Sit),
    (stock::SIT_FEMALE, MovementState::Sit),
    (stock::SIT_GENERIC, MovementState::Sit),
    (stock::SIT_GROUND, MovementState::GroundSit),
    (stock::SIT_GROUND_CONSTRAINED, MovementState::GroundSit),
    (stock::HOVER, MovementState::Hover),
    (stock::HOVER_DOWN, MovementState::HoverDown),
    (stock::HOVER_UP, MovementState::HoverUp),
    (stock::CROUCH, MovementState::Crouch),
    (stock::CROUCHWALK, MovementState::CrouchWalk),
    (stock::FALLDOWN, MovementState::Fall),
    (stock::STANDUP, MovementState::StandUp),
    (stock::LAND, MovementState::Land),
    (stock::FLY, MovementState::Fly),
    (stock::FLYSLOW, MovementState::FlySlow),
];

impl OverrideTable {
    /// Table with one empty row per known stock animation.
    pub fn new() -> Self {
        let mut table = Self::default();
        table.initialize();
        table
    }

    /// Reset to one empty row per known stock animation.
    pub fn initialize(&mut self) {
        self.rows.clear();
        self.by_state.clear();
        for (stock_id, state) in STOCK_ROWS {
            self.rows.insert(
                stock_id,
                OverrideEntry {
                    stock_animation_id: stock_id,
                    override_animation_id: None,
                    state,
                },
            );
            self.by_state.entry(state).or_default().push(stock_id);
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn override_for(&self, stock_id: AssetId) -> Option<AssetId> {
        self.rows.get(&stock_id).and_then(|row| row.override_animation_id)
    }

    pub fn state_for(&self, stock_id: AssetId) -> MovementState {
        self.rows
            .get(&stock_id)
            .map(|row| row.state)
            .unwrap_or(MovementState::Idle)
    }

    /// First stock id registered for `state`.
    pub fn stock_id_for_state(&self, state: MovementState) -> Option<AssetId> {
        self.by_state.get(&state).and_then(|ids| ids.first().copied())
    }

    /// Override configured for the first stock id registered for `state`.
    pub fn override_for_state(&self, state: MovementState) -> Option<AssetId> {
        self.stock_id_for_state(state)
            .and_then(|stock_id| self.override_for(stock_id))
    }

    /// Set the override on every row belonging to `state`.
    pub fn set_override(&mut self, state: MovementState, animation_id: AssetId) {
        self.assign(state, Some(animation_id));
    }

    pub fn clear_override(&mut self, state: MovementState) {
        self.assign(state, None);
    }

    fn assign(&mut self, state: MovementState, animation_id: Option<AssetId>) {
        let Some(stock_ids) = self.by_state.get(&state) else {
            return;
        };
        for stock_id in stock_ids {
            if let Some(row) = self.rows.get_mut(stock_id) {
                row.override_animation_id = animation_id;
            }
        }
        debug!("🎭 Override for {} set to {:?}", state, animation_id);
    }

    /// Distinct states that have at least one row, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = MovementState> + '_ {
        self.by_state.keys().copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = &OverrideEntry> {
        self.rows.values()
    }
}
