//! Rate-limited fire control with catch-up.
//!
//! The timer answers "how many shots are due since last tick". Shots are
//! counted from the trigger edge: after `elapsed` held time the total is
//! `1 + floor(elapsed * rate_hz)`, and each call returns whatever part of that
//! total has not been handed out yet. Nothing is rounded into a per-shot
//! interval, so the effective rate stays exact regardless of frame jitter and
//! shots land exactly on interval boundaries.

use std::time::Duration;

const NANOS_PER_SEC: f64 = 1e9;

#[derive(Debug, Clone)]
pub struct WeaponTimer {
    firing: bool,
    rate_hz: f64,
    /// Time of the last released -> held edge. Stale while `firing` is false.
    edge: Duration,
    /// Shots handed out since `edge`, not counting the edge shot.
    fired: u64,
}

impl WeaponTimer {
    /// # Panics
    /// If `rate_hz` is not a positive finite number.
    pub fn new(rate_hz: f64) -> Self {
        assert!(
            rate_hz.is_finite() && rate_hz > 0.0,
            "fire rate must be positive and finite, got {rate_hz}"
        );

        Self {
            firing: false,
            rate_hz,
            edge: Duration::ZERO,
            fired: 0,
        }
    }

    /// Number of shots due at `now`.
    ///
    /// The edge from released to held always yields exactly one shot and
    /// restarts the count there.
    pub fn fire_bullets(&mut self, now: Duration, trigger_held: bool) -> u32 {
        if !trigger_held {
            self.firing = false;
            return 0;
        }

        if !self.firing {
            self.firing = true;
            self.edge = now;
            self.fired = 0;
            return 1;
        }

        let elapsed = now.saturating_sub(self.edge);
        let due = (elapsed.as_nanos() as f64 * self.rate_hz / NANOS_PER_SEC).floor() as u64;
        let shots = due.saturating_sub(self.fired);
        self.fired += shots;
        u32::try_from(shots).unwrap_or(u32::MAX)
    }
}
