//! Axis-aligned bounding boxes
//!
//! Every collider in the game (panels, Hambert, pecans) is a box built
//! from a center and its extents.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build a box centered on `center` with full extents `size`
    pub fn from_center(center: Vec3, size: Vec3) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Build a box from a center and (width, height, depth)
    #[inline]
    pub fn make(center: Vec3, width: f32, height: f32, depth: f32) -> Self {
        Self::from_center(center, Vec3::new(width, height, depth))
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// True if the per-axis intervals of both boxes all intersect.
    /// Touching faces count as overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
    }
}

/// Free-function form of [`Aabb::overlaps`]
#[inline]
pub fn check_collision_boxes(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}
