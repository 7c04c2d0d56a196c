//! Pecan pickup
//!
//! One pecan per generation, placed in a gap so it can always be reached.
//! It rides along with the panel row and disappears once eaten; the next
//! one only shows up with the next generation.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::geometry::Aabb;
use super::panels::PanelField;
use crate::consts::*;
use crate::slot_x;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pecan {
    /// Slot the pecan sits in, `None` once eaten
    slot: Option<usize>,
}

impl Pecan {
    /// Place a pecan in a random gap of `field`
    pub fn spawn<R: Rng + ?Sized>(field: &PanelField, rng: &mut R) -> Result<Self, SimError> {
        let slot = field.pick_random_empty_slot(rng)?;
        Ok(Self { slot: Some(slot) })
    }

    pub fn in_slot(slot: usize) -> Self {
        Self { slot: Some(slot) }
    }

    #[inline]
    pub fn slot(&self) -> Option<usize> {
        self.slot
    }

    #[inline]
    pub fn is_consumed(&self) -> bool {
        self.slot.is_none()
    }

    pub fn position(&self, field: &PanelField) -> Option<Vec3> {
        self.slot
            .map(|slot| Vec3::new(slot_x(slot), PECAN_Y, field.z()))
    }

    /// Collider, travelling with the field's depth. `None` once eaten.
    pub fn bounding_box(&self, field: &PanelField) -> Option<Aabb> {
        self.position(field)
            .map(|pos| Aabb::make(pos, PECAN_WIDTH, PECAN_HEIGHT, PECAN_DEPTH))
    }

    /// True if Hambert's box overlaps an uneaten pecan
    pub fn check_consumed(&self, field: &PanelField, actor: &Aabb) -> bool {
        self.bounding_box(field).is_some_and(|b| b.overlaps(actor))
    }

    /// Mark eaten; it cannot be collected again this generation
    pub fn consume(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::hambert::Hambert;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawns_in_a_gap() {
        let field = PanelField::with_layout([true, true, false, true, true], -5.0);
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..50 {
            let pecan = Pecan::spawn(&field, &mut rng).expect("gap exists");
            assert_eq!(pecan.slot(), Some(2));
        }
    }

    #[test]
    fn test_rides_with_field() {
        let field = PanelField::with_layout([true, false, false, false, true], -7.5);
        let pecan = Pecan::in_slot(1);
        assert_eq!(pecan.position(&field), Some(Vec3::new(-2.0, PECAN_Y, -7.5)));
    }

    #[test]
    fn test_consumed_only_on_overlap() {
        let field = PanelField::with_layout([true, false, false, false, true], 0.0);
        let mut pecan = Pecan::in_slot(1);

        let far = Hambert { x: 2.0 }.bounding_box();
        assert!(!pecan.check_consumed(&field, &far));

        let near = Hambert { x: slot_x(1) }.bounding_box();
        assert!(pecan.check_consumed(&field, &near));

        pecan.consume();
        assert!(pecan.is_consumed());
        assert!(pecan.bounding_box(&field).is_none());
        assert!(!pecan.check_consumed(&field, &near));
    }
}
