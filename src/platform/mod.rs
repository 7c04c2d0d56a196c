//! Platform abstraction layer
//!
//! The collaborators a host plugs into the simulation:
//! - Input polling ([`InputSource`])
//! - Frame timing ([`FrameClock`])
//! - Drawing ([`RenderSink`])
//!
//! [`run_frame`] wires them together for one frame.

pub mod input;
pub mod time;

pub use input::{AutopilotInput, InputSource, ScriptedInput};
pub use time::{FixedClock, FrameClock, WallClock};

use crate::renderer::Scene;
use crate::sim::{GameEvent, GameState, SimError, tick};
use crate::ui::Hud;

/// Receives a finished frame to draw
pub trait RenderSink {
    fn present(&mut self, scene: &Scene, hud: &Hud);
}

/// Sink that draws nothing (headless runs)
#[derive(Debug, Default)]
pub struct NullSink {
    pub frames: u64,
}

impl RenderSink for NullSink {
    fn present(&mut self, scene: &Scene, hud: &Hud) {
        self.frames += 1;
        log::trace!(
            "frame {}: {} cubes, {} lines, hud {:?}",
            self.frames,
            scene.cubes.len(),
            scene.lines.len(),
            hud.texts().collect::<Vec<_>>()
        );
    }
}

/// Poll input, read the frame delta, tick once, then present.
/// Returns the events raised this frame.
pub fn run_frame(
    state: &mut GameState,
    input: &mut dyn InputSource,
    clock: &mut dyn FrameClock,
    sink: &mut dyn RenderSink,
) -> Result<Vec<GameEvent>, SimError> {
    let tick_input = input.poll();
    let dt = clock.frame_delta();
    tick(state, &tick_input, dt)?;
    sink.present(&Scene::build(state), &Hud::from_state(state));
    Ok(state.drain_events())
}
