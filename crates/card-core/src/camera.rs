//! Fixed camera and pointer picking against the card's image planes.
//!
//! These helpers avoid platform APIs so both the web and native frontends
//! can turn a pointer position into a hover flag the same way.

use crate::constants::{CAMERA_EYE, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::layout::PlaneSize;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Fixed perspective camera (right-handed, Y up) framing the card.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32, // viewport width / height
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The scene camera looking at the card center from `CAMERA_EYE`.
    pub fn looking_at_card(viewport_aspect: f32) -> Self {
        Self {
            eye: Vec3::from(CAMERA_EYE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: viewport_aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// World-space ray through pixel (`sx`, `sy`) of a `width` x `height` viewport.
pub fn screen_to_world_ray(camera: &Camera, width: f32, height: f32, sx: f32, sy: f32) -> Ray {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let inv = camera.view_proj().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    Ray {
        origin: camera.eye,
        dir: (p1 - camera.eye).normalize(),
    }
}

/// Texture coordinate where `ray` crosses a finite plane, if it does.
///
/// `model` places an unscaled plane (local XY, facing +Z); `size` is its
/// extent. Both sides count as a hit. uv (0,0) is the top-left corner.
pub fn ray_plane_uv(ray: Ray, model: Mat4, size: PlaneSize) -> Option<Vec2> {
    if size.width <= 0.0 || size.height <= 0.0 {
        return None;
    }
    let inv = model.inverse();
    let o = inv.transform_point3(ray.origin);
    let d = inv.transform_vector3(ray.dir);
    if d.z.abs() < 1e-6 {
        return None;
    }
    let t = -o.z / d.z;
    if t < 0.0 {
        return None;
    }
    let hit = o + d * t;
    let u = hit.x / size.width + 0.5;
    let v = 0.5 - hit.y / size.height;
    ((0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v)).then_some(Vec2::new(u, v))
}
