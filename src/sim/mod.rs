//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Single-threaded, one `tick` per frame
//! - Seeded RNG owned by the state
//! - Hosts read state, they never write it

pub mod autopilot;
pub mod collision;
pub mod error;
pub mod eye;
pub mod geometry;
pub mod hambert;
pub mod panels;
pub mod pecan;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, any_panel_collision, first_panel_hit, resolve};
pub use error::SimError;
pub use eye::Eye;
pub use geometry::{Aabb, check_collision_boxes};
pub use hambert::Hambert;
pub use panels::{Layout, PanelField, roll_layout};
pub use pecan::Pecan;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
