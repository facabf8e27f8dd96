use std::time::Instant;

/// Wall-clock frame timer for the frame driver. Each `tick` returns the
/// seconds elapsed since the previous tick; the simulation treats a
/// non-positive delta as a skipped frame, so clock anomalies stay local.
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Delta time since the last tick, advancing the clock.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    /// Restart timing from now, e.g. after a long blocking load so the
    /// first simulated frame does not see a giant delta.
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
