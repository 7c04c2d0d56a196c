//! Render-side data
//!
//! The drawing backend is external. This module turns a [`GameState`]
//! into a flat [`Scene`] it can draw without knowing game rules.
//!
//! [`GameState`]: crate::sim::GameState

pub mod instance;
pub mod scene;

pub use instance::{CubeInstance, colors};
pub use scene::{Camera, EyeSprite, Line3, Scene};
