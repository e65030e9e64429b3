//! CPU rendition of `fs_mask` in `shaders/mask.wgsl`.
//!
//! Both evaluate the same per-fragment algorithm from the same packed uniform
//! blocks; keep them in step when either changes.

use crate::constants::{ALPHA_DISCARD_EPSILON, ASPECT_EPSILON, MAX_CIRCLES};
use crate::texture::TextureSource;
use crate::uniforms::{CircleUniforms, MaskUniforms};
use glam::{Vec2, Vec4};

/// Read-only view over one frame's uniforms. Evaluation holds no state, so any
/// number of fragments may be shaded in any order.
#[derive(Clone, Copy, Debug)]
pub struct MaskProgram<'a> {
    circles: &'a CircleUniforms,
    uniforms: &'a MaskUniforms,
}

impl<'a> MaskProgram<'a> {
    pub fn new(circles: &'a CircleUniforms, uniforms: &'a MaskUniforms) -> Self {
        Self { circles, uniforms }
    }

    #[inline]
    fn scale(&self) -> Vec2 {
        Vec2::new(1.0, self.uniforms.aspect)
    }

    /// Orbit center of circle `index` in aspect-corrected, centered space.
    pub fn circle_center(&self, index: usize) -> Vec2 {
        let [base_angle, distance, _, speed] = self.circles.params[index];
        let angle = base_angle + self.uniforms.time * speed;
        0.5 * distance * Vec2::new(angle.cos(), angle.sin()) * self.scale()
    }

    /// Mask value in 0..1 for a texture coordinate.
    pub fn mask(&self, uv: Vec2) -> f32 {
        let u = self.uniforms;
        let p = (uv - Vec2::splat(0.5)) * self.scale();
        let feather = u.edge_feather / u.aspect.max(ASPECT_EPSILON);
        let n = (u.count as usize).min(MAX_CIRCLES);

        let mut mask = 0.0f32;
        for i in 0..n {
            let radius = self.circles.params[i][2] * u.size_mul;
            let d = p.distance(self.circle_center(i));
            let circle = soft_circle(radius, feather, d) * self.circles.opacity(i) * u.opacity_mul;
            // Brightest wins; overlapping apertures never add up
            mask = mask.max(circle);
        }
        mask.clamp(0.0, 1.0)
    }

    /// Output color for a fragment, or `None` when it is discarded.
    pub fn shade(&self, uv: Vec2, texel: Vec4) -> Option<Vec4> {
        let alpha = self.mask(uv);
        (alpha >= ALPHA_DISCARD_EPSILON).then(|| texel.truncate().extend(alpha))
    }

    pub fn shade_texture<T: TextureSource + ?Sized>(&self, texture: &T, uv: Vec2) -> Option<Vec4> {
        self.shade(uv, texture.sample(uv))
    }
}

/// Cubic Hermite interpolation; `edge0 > edge1` yields a falling edge.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// 1 inside `radius - feather`, easing to 0 at `radius`. A zero feather is a hard edge.
#[inline]
pub fn soft_circle(radius: f32, feather: f32, d: f32) -> f32 {
    if feather <= 0.0 {
        return if d < radius { 1.0 } else { 0.0 };
    }
    smoothstep(radius, radius - feather, d)
}
