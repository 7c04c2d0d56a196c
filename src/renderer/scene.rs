//! Scene snapshot for the drawing backend

use glam::{Vec2, Vec3};

use super::instance::{CubeInstance, colors};
use crate::consts::*;
use crate::sim::{GamePhase, GameState};

/// Side walls are long enough to run off both ends of the view
const WALL_LENGTH: f32 = 100.0;
/// Ground lines running along the track span this depth range
const GRID_Z_NEAR: f32 = 200.0;
const GRID_Z_FAR: f32 = -100.0;
/// Cross lines drawn on each side of the panel row
const GRID_CROSS_LINES: i32 = 20;

/// Perspective camera trailing Hambert
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view (degrees)
    pub fovy: f32,
}

impl Camera {
    /// Camera slid sideways to stay behind Hambert
    pub fn following(x: f32) -> Self {
        Self {
            position: Vec3::new(x, CAMERA_POSITION.y, CAMERA_POSITION.z),
            target: Vec3::new(x, 0.0, 0.0),
            up: Vec3::Y,
            fovy: CAMERA_FOVY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3 {
    pub start: Vec3,
    pub end: Vec3,
    pub color: [f32; 4],
}

/// Screen-space circle for the eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeSprite {
    pub center: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
}

/// Everything to draw for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub clear_color: [f32; 4],
    pub camera: Camera,
    /// 2D underlay drawn before the 3D pass
    pub eye: Option<EyeSprite>,
    pub lines: Vec<Line3>,
    pub cubes: Vec<CubeInstance>,
}

impl Scene {
    pub fn build(state: &GameState) -> Self {
        let mut scene = Self {
            clear_color: colors::BACKGROUND,
            camera: Camera::following(state.hambert.x),
            eye: None,
            lines: Vec::new(),
            cubes: Vec::new(),
        };

        if state.phase == GamePhase::Playing && state.eye.is_visible() {
            scene.eye = Some(EyeSprite {
                center: state.eye.screen_position(),
                radius: EYE_RADIUS,
                color: colors::EYE,
            });
        }

        scene.push_grid(state.panels.z());
        scene.push_walls();

        let panel_size = Vec3::new(PANEL_WIDTH, PANEL_HEIGHT, PANEL_DEPTH);
        for (slot, _) in state.panels.live_boxes() {
            let center = state.panels.slot_center(slot);
            scene
                .cubes
                .push(CubeInstance::solid(center, panel_size, colors::PANEL));
            scene
                .cubes
                .push(CubeInstance::wire(center, panel_size, colors::PANEL_WIRE));
        }

        if let Some(pos) = state.pecan.position(&state.panels) {
            scene.cubes.push(CubeInstance::solid(
                pos,
                Vec3::new(PECAN_WIDTH, PECAN_HEIGHT, PECAN_DEPTH),
                colors::PECAN,
            ));
        }

        scene.cubes.push(CubeInstance::solid(
            state.hambert.position(),
            Vec3::new(HAMBERT_WIDTH, HAMBERT_HEIGHT, HAMBERT_DEPTH),
            colors::HAMBERT,
        ));

        scene
    }

    /// Ground grid. Cross lines scroll with the panel row.
    fn push_grid(&mut self, z: f32) {
        let half = TRACK_WIDTH / 2.0;
        for i in -GRID_CROSS_LINES..=GRID_CROSS_LINES {
            let line_z = z + i as f32 * GRID_SPACING;
            self.lines.push(Line3 {
                start: Vec3::new(-half, 0.0, line_z),
                end: Vec3::new(half, 0.0, line_z),
                color: colors::GRID,
            });
        }

        let width = TRACK_WIDTH as i32;
        for i in -width..width {
            let x = i as f32 * GRID_SPACING;
            self.lines.push(Line3 {
                start: Vec3::new(x, 0.0, GRID_Z_FAR),
                end: Vec3::new(x, 0.0, GRID_Z_NEAR),
                color: colors::GRID,
            });
        }
    }

    fn push_walls(&mut self) {
        let size = Vec3::new(PANEL_DEPTH, PANEL_HEIGHT, WALL_LENGTH);
        for x in [-TRACK_WIDTH / 2.0, TRACK_WIDTH / 2.0] {
            let center = Vec3::new(x, PANEL_HEIGHT / 2.0, 0.0);
            self.cubes
                .push(CubeInstance::solid(center, size, colors::PANEL));
            self.cubes
                .push(CubeInstance::wire(center, size, colors::PANEL_WIRE));
        }
    }
}
