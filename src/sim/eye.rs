//! The watching eye
//!
//! A purely visual backdrop element: an angle that orbits the screen
//! center while playing and is only drawn over part of its orbit.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Orbit window (radians) in which the eye is drawn
pub const EYE_VISIBLE_START: f32 = 1.25 * PI;
pub const EYE_VISIBLE_END: f32 = 2.0 * PI - 0.15 * PI;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Eye {
    /// Orbit angle in [0, 2π)
    pub angle: f32,
}

impl Eye {
    pub fn advance(&mut self, speed: f32, dt: f32) {
        self.angle = (self.angle + speed * dt).rem_euclid(TAU);
        log::trace!("eye angle = {}", self.angle);
    }

    pub fn is_visible(&self) -> bool {
        self.angle > EYE_VISIBLE_START && self.angle < EYE_VISIBLE_END
    }

    /// Screen-space center of the eye
    pub fn screen_position(&self) -> Vec2 {
        Vec2::new(
            self.angle.cos() * EYE_ORBIT_RADIUS + SCREEN_WIDTH / 2.0,
            self.angle.sin() * EYE_ORBIT_RADIUS + SCREEN_HEIGHT / 2.0,
        )
    }
}
