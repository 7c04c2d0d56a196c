//! Hambert, the player character
//!
//! Hambert only moves sideways. Depth and height are fixed; panels come
//! to him.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hambert {
    /// Lateral position, always within [HAMBERT_MIN_X, HAMBERT_MAX_X]
    pub x: f32,
}

impl Hambert {
    /// Net lateral direction for the held keys: -1 left, +1 right.
    /// Holding both cancels out.
    pub fn steer(left: bool, right: bool) -> f32 {
        let mut dir = 0.0;
        if left {
            dir -= 1.0;
        }
        if right {
            dir += 1.0;
        }
        dir
    }

    /// Move by the held direction for `dt` seconds, then clamp to the track
    pub fn move_by(&mut self, left: bool, right: bool, speed: f32, dt: f32) {
        let dx = Self::steer(left, right) * speed * dt;
        self.x = (self.x + dx).clamp(HAMBERT_MIN_X, HAMBERT_MAX_X);
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, HAMBERT_Y, HAMBERT_Z)
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::make(self.position(), HAMBERT_WIDTH, HAMBERT_HEIGHT, HAMBERT_DEPTH)
    }
}
