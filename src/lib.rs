//! Hambert's Quest - a lane-dodging arcade game
//!
//! Core modules:
//! - `sim`: Simulation (panel field, Hambert, pecans, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `renderer`: Scene snapshot handed to the drawing backend
//! - `ui`: HUD text
//! - `platform`: Host collaborators and the per-frame driver
//! - `leaderboard`: Best runs of the session

pub mod leaderboard;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use leaderboard::{Leaderboard, RunRecord};
pub use tuning::{EdgePolicy, Tuning, TuningError};

use glam::Vec3;

/// Fixed world geometry
pub mod consts {
    use glam::Vec3;

    /// Window dimensions the HUD and eye are laid out against
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;

    /// Camera sits behind Hambert, slightly raised
    pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 1.0, 10.0);
    pub const CAMERA_FOVY: f32 = 45.0;

    /// Total lateral width of the track
    pub const TRACK_WIDTH: f32 = 10.0;

    /// Number of discrete lateral slots
    pub const SLOT_COUNT: usize = 5;

    /// Panel defaults
    pub const PANEL_WIDTH: f32 = 2.0;
    pub const PANEL_HEIGHT: f32 = 2.0;
    pub const PANEL_DEPTH: f32 = 0.1;
    pub const PANEL_Y: f32 = PANEL_HEIGHT / 2.0;

    /// Hambert defaults
    pub const HAMBERT_WIDTH: f32 = 1.5;
    pub const HAMBERT_HEIGHT: f32 = 0.75;
    pub const HAMBERT_DEPTH: f32 = 0.1;
    pub const HAMBERT_MIN_X: f32 = -TRACK_WIDTH / 2.0 + HAMBERT_WIDTH / 2.0;
    pub const HAMBERT_MAX_X: f32 = TRACK_WIDTH / 2.0 - HAMBERT_WIDTH / 2.0;
    pub const HAMBERT_Y: f32 = HAMBERT_HEIGHT / 2.0;
    pub const HAMBERT_Z: f32 = 0.0;

    /// Pecan defaults
    pub const PECAN_WIDTH: f32 = 0.5;
    pub const PECAN_HEIGHT: f32 = 0.5;
    pub const PECAN_DEPTH: f32 = 0.1;
    pub const PECAN_Y: f32 = PECAN_HEIGHT / 2.0;

    /// Eye orbit (screen space, pixels)
    pub const EYE_RADIUS: f32 = 32.0;
    pub const EYE_ORBIT_RADIUS: f32 = 100.0;

    /// Ground grid
    pub const GRID_SPACING: f32 = 1.0;
}

use consts::*;

/// World X of a slot's center. Slots are spaced one panel width apart,
/// centered on the track.
#[inline]
pub fn slot_x(slot: usize) -> f32 {
    let offset = -PANEL_WIDTH * (SLOT_COUNT / 2) as f32;
    slot as f32 * PANEL_WIDTH + offset
}

/// Center of a panel in `slot` at scroll depth `z`
#[inline]
pub fn panel_center(slot: usize, z: f32) -> Vec3 {
    Vec3::new(slot_x(slot), PANEL_Y, z)
}
