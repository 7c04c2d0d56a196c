//! Collision resolution for one tick
//!
//! Hambert's box is tested against every live panel and the pecan. All
//! reads use the post-move Hambert and post-advance field for the tick.

use super::geometry::Aabb;
use super::panels::PanelField;
use super::pecan::Pecan;

/// Verdicts for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionReport {
    /// First live slot whose panel overlaps Hambert
    pub panel_hit: Option<usize>,
    /// Hambert overlaps an uneaten pecan
    pub pecan_hit: bool,
}

impl CollisionReport {
    #[inline]
    pub fn crashed(&self) -> bool {
        self.panel_hit.is_some()
    }
}

/// First live slot overlapping `actor`, if any
pub fn first_panel_hit(field: &PanelField, actor: &Aabb) -> Option<usize> {
    field
        .live_boxes()
        .find(|(_, panel)| panel.overlaps(actor))
        .map(|(slot, _)| slot)
}

/// True iff `actor` overlaps any live panel
pub fn any_panel_collision(field: &PanelField, actor: &Aabb) -> bool {
    first_panel_hit(field, actor).is_some()
}

/// Run every check for this tick
pub fn resolve(field: &PanelField, pecan: &Pecan, actor: &Aabb) -> CollisionReport {
    CollisionReport {
        panel_hit: first_panel_hit(field, actor),
        pecan_hit: pecan.check_consumed(field, actor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::hambert::Hambert;

    #[test]
    fn test_hits_live_panel_in_front_of_hambert() {
        let field = PanelField::with_layout([false, false, true, false, false], HAMBERT_Z);
        let actor = Hambert { x: 0.0 }.bounding_box();
        assert!(any_panel_collision(&field, &actor));
        assert_eq!(first_panel_hit(&field, &actor), Some(2));
    }

    #[test]
    fn test_gap_is_safe() {
        let field = PanelField::with_layout([true, true, false, true, true], HAMBERT_Z);
        let actor = Hambert { x: 0.0 }.bounding_box();
        assert!(!any_panel_collision(&field, &actor));
    }

    #[test]
    fn test_straddling_two_panels_hits() {
        // Hambert halfway between slots 2 and 3 overlaps slot 3's panel
        let field = PanelField::with_layout([true, true, false, true, false], HAMBERT_Z);
        let actor = Hambert { x: 1.0 }.bounding_box();
        assert_eq!(first_panel_hit(&field, &actor), Some(3));
    }

    #[test]
    fn test_distant_row_is_safe() {
        let field = PanelField::with_layout([true, true, true, true, false], -5.0);
        let actor = Hambert { x: 0.0 }.bounding_box();
        assert!(!any_panel_collision(&field, &actor));
    }

    #[test]
    fn test_resolve_reports_both() {
        let field = PanelField::with_layout([false, true, false, false, false], HAMBERT_Z);
        let pecan = Pecan::in_slot(0);
        let actor = Hambert { x: -3.5 }.bounding_box();
        let report = resolve(&field, &pecan, &actor);
        assert!(report.pecan_hit);
        assert!(report.crashed());
        assert_eq!(report.panel_hit, Some(1));
    }
}
