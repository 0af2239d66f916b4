//! Movement states and the user-facing override slots.

use super::stock;
use super::AssetId;
use std::fmt;

/// Semantic category of what the avatar is currently doing.
///
/// Exactly one state is current at any time and it decides which override,
/// if any, is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MovementState {
    Idle,
    Walk,
    Run,
    Jump,
    PreJump,
    TurnLeft,
    TurnRight,
    Sit,
    GroundSit,
    Crouch,
    CrouchWalk,
    Fall,
    StandUp,
    Land,
    Fly,
    FlySlow,
    HoverUp,
    HoverDown,
    Hover,
    Stand,
}

impl Default for MovementState {
    fn default() -> Self {
        MovementState::Idle
    }
}

impl MovementState {
    /// Idle and Stand are the only states where stand cycling may run.
    pub fn is_standing(self) -> bool {
        matches!(self, MovementState::Idle | MovementState::Stand)
    }

    pub fn is_sitting(self) -> bool {
        matches!(self, MovementState::Sit | MovementState::GroundSit)
    }

    pub fn is_airborne(self) -> bool {
        matches!(
            self,
            MovementState::Fly
                | MovementState::FlySlow
                | MovementState::Hover
                | MovementState::HoverUp
                | MovementState::HoverDown
        )
    }
}

impl fmt::Display for MovementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MovementState::Idle => "Idle",
            MovementState::Walk => "Walk",
            MovementState::Run => "Run",
            MovementState::Jump => "Jump",
            MovementState::PreJump => "PreJump",
            MovementState::TurnLeft => "TurnLeft",
            MovementState::TurnRight => "TurnRight",
            MovementState::Sit => "Sit",
            MovementState::GroundSit => "GroundSit",
            MovementState::Crouch => "Crouch",
            MovementState::CrouchWalk => "CrouchWalk",
            MovementState::Fall => "Fall",
            MovementState::StandUp => "StandUp",
            MovementState::Land => "Land",
            MovementState::Fly => "Fly",
            MovementState::FlySlow => "FlySlow",
            MovementState::HoverUp => "HoverUp",
            MovementState::HoverDown => "HoverDown",
            MovementState::Hover => "Hover",
            MovementState::Stand => "Stand",
        };
        write!(f, "{}", name)
    }
}

/// A user-selectable override slot.
///
/// Each slot ties together the movement state it overrides, the stock
/// animation that gets stopped when the selection changes, and the key its
/// default animation name is persisted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AoSlot {
    Walk,
    Run,
    Jump,
    Sit,
    GroundSit,
    Crouch,
    CrouchWalk,
    Fall,
    Hover,
    Fly,
    FlySlow,
    FlyUp,
    FlyDown,
    Land,
    StandUp,
    PreJump,
}

impl AoSlot {
    pub const ALL: [AoSlot; 16] = [
        AoSlot::Walk,
        AoSlot::Run,
        AoSlot::Jump,
        AoSlot::Sit,
        AoSlot::GroundSit,
        AoSlot::Crouch,
        AoSlot::CrouchWalk,
        AoSlot::Fall,
        AoSlot::Hover,
        AoSlot::Fly,
        AoSlot::FlySlow,
        AoSlot::FlyUp,
        AoSlot::FlyDown,
        AoSlot::Land,
        AoSlot::StandUp,
        AoSlot::PreJump,
    ];

    pub fn state(self) -> MovementState {
        match self {
            AoSlot::Walk => MovementState::Walk,
            AoSlot::Run => MovementState::Run,
            AoSlot::Jump => MovementState::Jump,
            AoSlot::Sit => MovementState::Sit,
            AoSlot::GroundSit => MovementState::GroundSit,
            AoSlot::Crouch => MovementState::Crouch,
            AoSlot::CrouchWalk => MovementState::CrouchWalk,
            AoSlot::Fall => MovementState::Fall,
            AoSlot::Hover => MovementState::Hover,
            AoSlot::Fly => MovementState::Fly,
            AoSlot::FlySlow => MovementState::FlySlow,
            AoSlot::FlyUp => MovementState::HoverUp,
            AoSlot::FlyDown => MovementState::HoverDown,
            AoSlot::Land => MovementState::Land,
            AoSlot::StandUp => MovementState::StandUp,
            AoSlot::PreJump => MovementState::PreJump,
        }
    }

    /// Stock animation whose override is stopped when the slot changes.
    pub fn stock_animation(self) -> AssetId {
        match self {
            AoSlot::Walk => stock::WALK,
            AoSlot::Run => stock::RUN,
            AoSlot::Jump => stock::JUMP,
            AoSlot::Sit => stock::SIT,
            AoSlot::GroundSit => stock::SIT_GROUND,
            AoSlot::Crouch => stock::CROUCH,
            AoSlot::CrouchWalk => stock::CROUCHWALK,
            AoSlot::Fall => stock::FALLDOWN,
            AoSlot::Hover => stock::HOVER,
            AoSlot::Fly => stock::FLY,
            AoSlot::FlySlow => stock::FLYSLOW,
            AoSlot::FlyUp => stock::HOVER_UP,
            AoSlot::FlyDown => stock::HOVER_DOWN,
            AoSlot::Land => stock::LAND,
            AoSlot::StandUp => stock::STANDUP,
            AoSlot::PreJump => stock::PRE_JUMP,
        }
    }

    /// Key under which the slot's default animation name is persisted.
    pub fn setting_key(self) -> &'static str {
        match self {
            AoSlot::Walk => "default_walk",
            AoSlot::Run => "default_run",
            AoSlot::Jump => "default_jump",
            AoSlot::Sit => "default_sit",
            AoSlot::GroundSit => "default_ground_sit",
            AoSlot::Crouch => "default_crouch",
            AoSlot::CrouchWalk => "default_crouch_walk",
            AoSlot::Fall => "default_fall",
            AoSlot::Hover => "default_hover",
            AoSlot::Fly => "default_fly",
            AoSlot::FlySlow => "default_fly_slow",
            AoSlot::FlyUp => "default_fly_up",
            AoSlot::FlyDown => "default_fly_down",
            AoSlot::Land => "default_land",
            AoSlot::StandUp => "default_stand_up",
            AoSlot::PreJump => "default_pre_jump",
        }
    }

    pub fn for_state(state: MovementState) -> Option<AoSlot> {
        AoSlot::ALL.into_iter().find(|slot| slot.state() == state)
    }
}

impl fmt::Display for AoSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_states_are_unique() {
        for slot in AoSlot::ALL {
            assert_eq!(AoSlot::for_state(slot.state()), Some(slot));
        }
    }

    #[test]
    fn test_turns_and_stand_have_no_slot() {
        assert_eq!(AoSlot::for_state(MovementState::TurnLeft), None);
        assert_eq!(AoSlot::for_state(MovementState::TurnRight), None);
        assert_eq!(AoSlot::for_state(MovementState::Stand), None);
        assert_eq!(AoSlot::for_state(MovementState::Idle), None);
    }

    #[test]
    fn test_state_families() {
        assert!(MovementState::Idle.is_standing());
        assert!(MovementState::Stand.is_standing());
        assert!(!MovementState::Walk.is_standing());
        assert!(MovementState::GroundSit.is_sitting());
        assert!(MovementState::HoverDown.is_airborne());
        assert!(!MovementState::Land.is_airborne());
    }
}
