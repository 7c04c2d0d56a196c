//! On-screen text
//!
//! The simulation never draws; this module only describes what text the
//! host should put on screen.

pub mod hud;

pub use hud::{Anchor, Hud, TextLine};
