//! Frame timing
//!
//! The simulation has no clock of its own; the host supplies the delta.

use std::time::Instant;

pub trait FrameClock {
    /// Seconds since the previous frame
    fn frame_delta(&mut self) -> f32;
}

/// Same delta every frame (headless runs, tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl FrameClock for FixedClock {
    fn frame_delta(&mut self) -> f32 {
        self.dt
    }
}

/// Real elapsed time between calls. The first call reports zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock {
    last: Option<Instant>,
}

impl WallClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for WallClock {
    fn frame_delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .last
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last = Some(now);
        dt
    }
}
