//! The local avatar as seen by the animation overrider.
//!
//! [`AgentState`] carries the kinematic and camera flags the overrider
//! queries. [`AvatarAnimations`] turns the simulator's signaled animation set
//! into start and stop events for the engine.

use crate::ao::{AoEngine, AssetId, AvatarStatus, MovementEvent};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Sit, fly and camera flags of the local agent.
#[derive(Debug)]
pub struct AgentState {
    sitting: AtomicBool,
    sitting_on_ground: AtomicBool,
    flying: AtomicBool,
    mouselook: AtomicBool,
    logged_in: AtomicBool,
}

impl Default for AgentState {
    fn default() -> Self {
        Self {
            sitting: AtomicBool::new(false),
            sitting_on_ground: AtomicBool::new(false),
            flying: AtomicBool::new(false),
            mouselook: AtomicBool::new(false),
            logged_in: AtomicBool::new(true),
        }
    }
}

impl AgentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sit change. Returns the event to forward when it changed.
    pub fn set_sitting(&self, sitting: bool, on_ground: bool) -> Option<MovementEvent> {
        let was_sitting = self.sitting.swap(sitting, Ordering::SeqCst);
        let was_on_ground = self.sitting_on_ground.swap(sitting && on_ground, Ordering::SeqCst);
        if was_sitting == sitting && (!sitting || was_on_ground == on_ground) {
            return None;
        }
        debug!("🪑 Agent sitting: {} (ground: {})", sitting, on_ground);
        Some(MovementEvent::SitChanged { sitting, on_ground })
    }

    pub fn is_sitting_on_ground(&self) -> bool {
        self.sitting_on_ground.load(Ordering::SeqCst)
    }

    pub fn set_flying(&self, flying: bool) -> Option<MovementEvent> {
        if self.flying.swap(flying, Ordering::SeqCst) == flying {
            return None;
        }
        debug!("🕊️ Agent flying: {}", flying);
        Some(MovementEvent::FlyChanged { flying })
    }

    pub fn set_mouselook(&self, mouselook: bool) {
        self.mouselook.store(mouselook, Ordering::SeqCst);
    }

    pub fn set_logged_in(&self, logged_in: bool) {
        self.logged_in.store(logged_in, Ordering::SeqCst);
    }
}

impl AvatarStatus for AgentState {
    fn is_sitting(&self) -> bool {
        self.sitting.load(Ordering::SeqCst)
    }

    fn is_flying(&self) -> bool {
        self.flying.load(Ordering::SeqCst)
    }

    fn in_mouselook(&self) -> bool {
        self.mouselook.load(Ordering::SeqCst)
    }

    fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }
}

/// Animations currently playing on the avatar.
#[derive(Debug, Default, Clone)]
pub struct AvatarAnimations {
    playing: BTreeSet<AssetId>,
}

impl AvatarAnimations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self, animation_id: AssetId) -> bool {
        self.playing.contains(&animation_id)
    }

    /// Diff the signaled set against what is playing.
    /// Stops come before starts.
    pub fn update(&mut self, signaled: &[AssetId]) -> Vec<MovementEvent> {
        let signaled: BTreeSet<AssetId> = signaled.iter().copied().collect();

        let mut events: Vec<MovementEvent> = self
            .playing
            .difference(&signaled)
            .map(|&animation_id| MovementEvent::MotionStopped { animation_id })
            .collect();
        events.extend(
            signaled
                .difference(&self.playing)
                .map(|&animation_id| MovementEvent::MotionStarted { animation_id }),
        );

        self.playing = signaled;
        events
    }

    /// Apply a signaled set and forward the resulting events to `engine`.
    /// Returns how many the engine handled.
    pub fn dispatch(&mut self, engine: &mut AoEngine, signaled: &[AssetId]) -> usize {
        self.update(signaled)
            .into_iter()
            .filter(|&event| engine.observe(event))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ao::stock;

    #[test]
    fn test_sit_change_reported_once() {
        let agent = AgentState::new();
        assert_eq!(
            agent.set_sitting(true, false),
            Some(MovementEvent::SitChanged { sitting: true, on_ground: false })
        );
        assert_eq!(agent.set_sitting(true, false), None);
        assert!(agent.is_sitting());
        assert!(!agent.is_sitting_on_ground());

        assert_eq!(
            agent.set_sitting(true, true),
            Some(MovementEvent::SitChanged { sitting: true, on_ground: true })
        );
        assert!(agent.set_sitting(false, false).is_some());
        assert!(!agent.is_sitting());
    }

    #[test]
    fn test_fly_change_reported_once() {
        let agent = AgentState::new();
        assert_eq!(agent.set_flying(false), None);
        assert_eq!(agent.set_flying(true), Some(MovementEvent::FlyChanged { flying: true }));
        assert!(agent.is_flying());
        assert_eq!(agent.set_flying(true), None);
    }

    #[test]
    fn test_update_emits_stops_before_starts() {
        let mut animations = AvatarAnimations::new();
        let events = animations.update(&[stock::WALK]);
        assert_eq!(events, vec![MovementEvent::MotionStarted { animation_id: stock::WALK }]);

        let events = animations.update(&[stock::RUN]);
        assert_eq!(
            events,
            vec![
                MovementEvent::MotionStopped { animation_id: stock::WALK },
                MovementEvent::MotionStarted { animation_id: stock::RUN },
            ]
        );
        assert!(animations.is_playing(stock::RUN));
        assert!(!animations.is_playing(stock::WALK));
        assert!(animations.update(&[stock::RUN]).is_empty());
    }
}
