//! Frame-driven timers for stand cycling and the first configuration load.

use super::AoEngineHandle;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Periodic trigger for stand cycling.
#[derive(Debug, Clone)]
pub struct StandTimer {
    period: Duration,
    next_due: Instant,
}

impl StandTimer {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Restart the countdown, picking up a new period.
    pub fn reset(&mut self, period: Duration, now: Instant) {
        debug!("⏱️ Stand timer reset to {:?}", period);
        self.period = period;
        self.next_due = now + period;
    }

    /// True once per elapsed period.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        true
    }
}

/// Waits for the inventory to finish loading before the first notecard load.
#[derive(Debug, Clone)]
pub struct InventoryGate {
    period: Duration,
    next_due: Instant,
    opened: bool,
}

impl InventoryGate {
    pub const CHECK_PERIOD: Duration = Duration::from_secs(1);

    pub fn new(now: Instant) -> Self {
        Self {
            period: Self::CHECK_PERIOD,
            next_due: now + Self::CHECK_PERIOD,
            opened: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    /// Returns true exactly once: on the first check where the overrider is
    /// enabled and the inventory is fully fetched.
    pub fn poll(&mut self, now: Instant, enabled: bool, inventory_ready: bool) -> bool {
        if self.opened || now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        if enabled && inventory_ready {
            info!("📦 Inventory fetched, loading animation overrides");
            self.opened = true;
            return true;
        }
        false
    }
}

/// Poll the engine's stand timer every `poll_every` on a tokio task.
pub fn spawn_stand_driver(handle: AoEngineHandle, poll_every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(poll_every);
        loop {
            interval.tick().await;
            let mut engine = handle.lock().await;
            if let Some(change) = engine.tick(Instant::now()) {
                debug!("⏱️ Stand timer fired: {:?}", change);
            }
        }
    })
}
