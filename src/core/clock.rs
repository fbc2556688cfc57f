use std::time::Instant;

/// Longest frame delta handed to the simulation, in seconds
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Frame clock - measures delta time between ticks
/// Deltas are clamped to [0, MAX_FRAME_DELTA] so a stalled window
/// cannot fast-forward the presentation
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    frames: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            frames: 0,
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.frames += 1;
        clamp_delta(delta)
    }

    /// Number of ticks so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Sanitize an externally measured delta
pub fn clamp_delta(delta: f32) -> f32 {
    if delta.is_finite() {
        delta.clamp(0.0, MAX_FRAME_DELTA)
    } else {
        0.0
    }
}
