//! Idle/demo mode steering
//!
//! Picks a target slot each tick and holds left/right toward it: the pecan
//! when there is one, otherwise the closest gap.

use super::state::{GamePhase, GameState};
use crate::slot_x;

/// Distance from the target below which Hambert stops steering
pub const AUTOPILOT_DEADBAND: f32 = 0.1;

/// Slot the autopilot is heading for
pub fn target_slot(state: &GameState) -> Option<usize> {
    if let Some(slot) = state.pecan.slot() {
        return Some(slot);
    }
    let x = state.hambert.x;
    state.panels.empty_slots().min_by(|&a, &b| {
        (slot_x(a) - x)
            .abs()
            .partial_cmp(&(slot_x(b) - x).abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

/// (left, right, confirm) for the current state
pub fn steer(state: &GameState) -> (bool, bool, bool) {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver => (false, false, true),
        GamePhase::Playing => {
            let Some(slot) = target_slot(state) else {
                return (false, false, false);
            };
            let dx = slot_x(slot) - state.hambert.x;
            if dx.abs() <= AUTOPILOT_DEADBAND {
                (false, false, false)
            } else {
                (dx < 0.0, dx > 0.0, false)
            }
        }
    }
}
