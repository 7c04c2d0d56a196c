//! Panel field: a bank of slots sharing one scroll depth
//!
//! Each generation rolls which slots hold a wall panel. The whole row then
//! scrolls toward the camera and is re-rolled once it passes Hambert.
//!
//! Generation is rejection sampling: roll every free slot with
//! `spawn_chance`, keep the layout only if the live count lands in
//! `[min_live, max_live]`. With the defaults (p = 0.5, 5 slots, 2..=4) an
//! attempt succeeds 25/32 of the time, so the retry cap is never the
//! limiting factor in practice.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::geometry::Aabb;
use crate::consts::*;
use crate::panel_center;
use crate::tuning::Tuning;

/// Slot occupancy for one generation
pub type Layout = [bool; SLOT_COUNT];

/// Roll a layout whose live count lies in `[min_live, max_live]`.
///
/// Slots pinned by the edge policy are always alive and count toward the
/// total. Fails after `retry_cap` rejected attempts.
pub fn roll_layout<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Result<Layout, SimError> {
    let mut layout = [false; SLOT_COUNT];
    for _ in 0..tuning.retry_cap {
        let mut live = 0;
        for (slot, alive) in layout.iter_mut().enumerate() {
            *alive = tuning.edge_policy.pins(slot) || rng.random_bool(tuning.spawn_chance);
            if *alive {
                live += 1;
            }
        }
        if (tuning.min_live..=tuning.max_live).contains(&live) {
            return Ok(layout);
        }
    }
    Err(SimError::GenerationExhausted {
        attempts: tuning.retry_cap,
        min_live: tuning.min_live,
        max_live: tuning.max_live,
    })
}

/// The current row of panels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelField {
    alive: Layout,
    /// Shared scroll depth of every slot
    z: f32,
}

impl PanelField {
    /// Roll a fresh field at the far starting depth
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Result<Self, SimError> {
        let alive = roll_layout(rng, tuning)?;
        log::debug!("Generated panel layout {}", format_layout(&alive));
        Ok(Self {
            alive,
            z: tuning.panel_start_z,
        })
    }

    /// Field with an explicit layout and depth
    pub fn with_layout(alive: Layout, z: f32) -> Self {
        Self { alive, z }
    }

    /// Replace this field with a fresh generation
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        tuning: &Tuning,
    ) -> Result<(), SimError> {
        *self = Self::generate(rng, tuning)?;
        Ok(())
    }

    /// Scroll toward the camera. Once the row passes `panel_reset_z` it is
    /// re-rolled at `panel_start_z`. Returns true if a regeneration happened.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        rng: &mut R,
        tuning: &Tuning,
    ) -> Result<bool, SimError> {
        self.z += tuning.panel_speed * dt;
        if self.z > tuning.panel_reset_z {
            self.regenerate(rng, tuning)?;
            return Ok(true);
        }
        Ok(false)
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.z
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.alive
    }

    pub fn live_count(&self) -> usize {
        self.alive.iter().filter(|&&alive| alive).count()
    }

    /// True iff `slot` has no panel. Out-of-range slots are never empty.
    pub fn is_slot_empty(&self, slot: usize) -> bool {
        self.alive.get(slot).is_some_and(|&alive| !alive)
    }

    pub fn is_slot_live(&self, slot: usize) -> bool {
        self.alive.get(slot).copied().unwrap_or(false)
    }

    /// World center of a slot at the current depth
    pub fn slot_center(&self, slot: usize) -> Vec3 {
        panel_center(slot, self.z)
    }

    /// Collider for the panel in `slot` (whether or not it is live)
    pub fn box_for_slot(&self, slot: usize) -> Aabb {
        Aabb::make(self.slot_center(slot), PANEL_WIDTH, PANEL_HEIGHT, PANEL_DEPTH)
    }

    /// Colliders of every live panel, with their slot index
    pub fn live_boxes(&self) -> impl Iterator<Item = (usize, Aabb)> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(slot, _)| (slot, self.box_for_slot(slot)))
    }

    /// Indices of every empty slot
    pub fn empty_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..SLOT_COUNT).filter(|&slot| self.is_slot_empty(slot))
    }

    /// Uniformly pick one empty slot
    pub fn pick_random_empty_slot<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, SimError> {
        let mut empty = [0usize; SLOT_COUNT];
        let mut len = 0;
        for slot in self.empty_slots() {
            empty[len] = slot;
            len += 1;
        }
        if len == 0 {
            log::error!("Panel layout {} has no gap", format_layout(&self.alive));
            return Err(SimError::NoEmptySlot);
        }
        Ok(empty[rng.random_range(0..len)])
    }
}

/// Render a layout as e.g. `[#.#.#]` for logs
pub fn format_layout(layout: &Layout) -> String {
    let cells: String = layout
        .iter()
        .map(|&alive| if alive { '#' } else { '.' })
        .collect();
    format!("[{cells}]")
}
