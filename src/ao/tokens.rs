//! Notecard section labels and the movement states they configure.

use super::MovementState;

/// What a recognised section header configures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    State(MovementState),
    /// Recognised label with no override behaviour behind it (swimming, floating).
    Unsupported,
}

/// A single row of the static token table.
#[derive(Debug, Clone, Copy)]
pub struct TokenEntry {
    pub label: &'static str,
    pub kind: SectionKind,
}

const fn entry(label: &'static str, state: MovementState) -> TokenEntry {
    TokenEntry { label, kind: SectionKind::State(state) }
}

const fn unsupported(label: &'static str) -> TokenEntry {
    TokenEntry { label, kind: SectionKind::Unsupported }
}

pub static TOKENS: [TokenEntry; 23] = [
    entry("[ Sitting On Ground ]", MovementState::GroundSit),
    entry("[ Sitting ]", MovementState::Sit),
    entry("[ Crouching ]", MovementState::Crouch),
    entry("[ Crouch Walking ]", MovementState::CrouchWalk),
    entry("[ Standing Up ]", MovementState::StandUp),
    entry("[ Falling ]", MovementState::Fall),
    entry("[ Flying Down ]", MovementState::HoverDown),
    entry("[ Flying Up ]", MovementState::HoverUp),
    entry("[ Flying Slow ]", MovementState::FlySlow),
    entry("[ Flying ]", MovementState::Fly),
    entry("[ Hovering ]", MovementState::Hover),
    entry("[ Jumping ]", MovementState::Jump),
    entry("[ Pre Jumping ]", MovementState::PreJump),
    entry("[ Running ]", MovementState::Run),
    entry("[ Turning Right ]", MovementState::TurnRight),
    entry("[ Turning Left ]", MovementState::TurnLeft),
    entry("[ Walking ]", MovementState::Walk),
    entry("[ Landing ]", MovementState::Land),
    entry("[ Standing ]", MovementState::Stand),
    unsupported("[ Swimming Down ]"),
    unsupported("[ Swimming Up ]"),
    unsupported("[ Swimming Forward ]"),
    unsupported("[ Floating ]"),
];

/// Look up a section label. Matching is exact and case-sensitive.
pub fn lookup(label: &str) -> Option<SectionKind> {
    TOKENS.iter().find(|t| t.label == label).map(|t| t.kind)
}

/// Movement state configured by `label`; Idle when unknown or unsupported.
pub fn state_for_token(label: &str) -> MovementState {
    match lookup(label) {
        Some(SectionKind::State(state)) => state,
        _ => MovementState::Idle,
    }
}
