//! CPU mirrors of the uniform blocks declared in `shaders/mask.wgsl`.
//!
//! Layouts follow WGSL uniform rules: arrays use a 16-byte element stride, so
//! the four per-circle scalars share one `vec4` and opacities are packed four
//! to a `vec4`.

use crate::constants::MAX_CIRCLES;
use crate::field::CircleField;
use glam::Mat4;

/// Per-frame scalars written by `MaskCompositor::tick`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaskUniforms {
    pub time: f32,
    pub speed_mul: f32,
    pub size_mul: f32,
    pub opacity_mul: f32,
    pub aspect: f32, // plane height / width
    pub edge_feather: f32,
    pub count: u32,
    pub _pad: u32,
}

impl Default for MaskUniforms {
    fn default() -> Self {
        Self {
            time: 0.0,
            speed_mul: 1.0,
            size_mul: 1.0,
            opacity_mul: 1.0,
            aspect: 1.0,
            edge_feather: 0.0,
            count: 0,
            _pad: 0,
        }
    }
}

/// Circle parameter arrays, written once per field.
///
/// `params[i]` = (base_angle, distance, size, speed); the opacity of circle
/// `i` lives in `opacities[i / 4][i % 4]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CircleUniforms {
    pub params: [[f32; 4]; MAX_CIRCLES],
    pub opacities: [[f32; 4]; MAX_CIRCLES / 4],
}

impl CircleUniforms {
    pub fn from_field(field: &CircleField) -> Self {
        let mut out: Self = bytemuck::Zeroable::zeroed();
        for (i, c) in field.iter().enumerate() {
            out.params[i] = [c.base_angle, c.distance, c.size, c.speed];
            out.opacities[i / 4][i % 4] = c.opacity;
        }
        out
    }

    #[inline]
    pub fn opacity(&self, index: usize) -> f32 {
        self.opacities[index / 4][index % 4]
    }
}

/// Vertex-stage transform for one image plane (unit quad scaled by the model).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneUniforms {
    pub mvp: [[f32; 4]; 4],
}

impl PlaneUniforms {
    pub fn new(view_proj: Mat4, model: Mat4) -> Self {
        Self {
            mvp: (view_proj * model).to_cols_array_2d(),
        }
    }
}
