//! GPU-ready cube instances

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One box to draw, laid out for direct upload as instance data
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CubeInstance {
    pub center: [f32; 3],
    pub size: [f32; 3],
    pub color: [f32; 4],
    /// 1 = draw edges only, 0 = solid
    pub wireframe: u32,
}

impl CubeInstance {
    pub fn solid(center: Vec3, size: Vec3, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            size: size.to_array(),
            color,
            wireframe: 0,
        }
    }

    pub fn wire(center: Vec3, size: Vec3, color: [f32; 4]) -> Self {
        Self {
            wireframe: 1,
            ..Self::solid(center, size, color)
        }
    }

    #[inline]
    pub fn is_wireframe(&self) -> bool {
        self.wireframe != 0
    }
}

/// Colors for game elements
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PANEL: [f32; 4] = rgb(0, 117, 44);
    pub const PANEL_WIRE: [f32; 4] = rgb(0, 228, 48);
    pub const GRID: [f32; 4] = PANEL;
    pub const HAMBERT: [f32; 4] = rgb(211, 176, 131);
    pub const PECAN: [f32; 4] = rgb(127, 106, 79);
    pub const EYE: [f32; 4] = rgb(245, 245, 245);
    pub const TEXT: [f32; 4] = EYE;
}
