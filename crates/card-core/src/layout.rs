//! Card composition: image plane sizing and the optional front/back faces.
//!
//! Faces take their material by constructor parameter. A face without a
//! material is simply absent; nothing downstream treats that as an error.

use crate::camera::{ray_plane_uv, Ray};
use crate::compositor::MaskCompositor;
use crate::constants::*;
use glam::{EulerRot, Mat4, Vec3};
use std::f32::consts::PI;

/// Card body dimensions and image plane margins/offsets (world units).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardConfig {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub image_margin: f32,
    pub back_image_margin: f32,
    pub image_z_offset: f32,
    pub back_image_z_offset: f32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
            depth: CARD_DEPTH,
            image_margin: IMAGE_MARGIN,
            back_image_margin: IMAGE_MARGIN,
            image_z_offset: IMAGE_Z_OFFSET,
            back_image_z_offset: IMAGE_Z_OFFSET,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneSize {
    pub width: f32,
    pub height: f32,
}

impl PlaneSize {
    /// Height over width; 1 for a degenerate plane.
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 {
            self.height / self.width
        } else {
            1.0
        }
    }
}

/// Where an image plane sits relative to the card body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FacePlacement {
    pub size: PlaneSize,
    pub offset: Vec3,
    pub rotation_y: f32,
}

impl FacePlacement {
    /// Plane transform without its size, for picking.
    pub fn model(&self, card: Mat4) -> Mat4 {
        card * Mat4::from_translation(self.offset) * Mat4::from_rotation_y(self.rotation_y)
    }

    /// Transform of the unit quad drawn for this plane.
    pub fn scaled_model(&self, card: Mat4) -> Mat4 {
        self.model(card) * Mat4::from_scale(Vec3::new(self.size.width, self.size.height, 1.0))
    }
}

/// Aspect (height / width) of an image of known pixel size, else `fallback`.
pub fn image_aspect(image_size: Option<(u32, u32)>, fallback: f32) -> f32 {
    match image_size {
        Some((w, h)) if w > 0 && h > 0 => h as f32 / w as f32,
        _ => fallback,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardLayout {
    pub config: CardConfig,
}

impl CardLayout {
    pub fn new(config: CardConfig) -> Self {
        Self { config }
    }

    /// Front plane fitted to the card width; height follows the image aspect.
    pub fn front_plane(&self, image_size: Option<(u32, u32)>) -> FacePlacement {
        let c = &self.config;
        FacePlacement {
            size: fit_width(c.width, c.image_margin, image_aspect(image_size, 1.0)),
            offset: Vec3::new(0.0, 0.0, c.depth / 2.0 + c.image_z_offset),
            rotation_y: 0.0,
        }
    }

    /// Back plane, turned to face -Z. Without an image size it reuses `front_aspect`.
    pub fn back_plane(&self, image_size: Option<(u32, u32)>, front_aspect: f32) -> FacePlacement {
        let c = &self.config;
        FacePlacement {
            size: fit_width(
                c.width,
                c.back_image_margin,
                image_aspect(image_size, front_aspect),
            ),
            offset: Vec3::new(0.0, 0.0, -(c.depth / 2.0 + c.back_image_z_offset)),
            rotation_y: PI,
        }
    }
}

fn fit_width(card_width: f32, margin: f32, aspect: f32) -> PlaneSize {
    let width = (card_width - margin * 2.0).max(0.0);
    PlaneSize {
        width,
        height: width * aspect,
    }
}

#[derive(Clone, Debug)]
pub enum FaceMaterial {
    /// Image revealed through the animated circle field.
    Masked(MaskCompositor),
    /// Plain textured face, fully opaque.
    Image,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceSide {
    Front,
    Back,
}

/// What a caller supplies for one side of the card.
#[derive(Clone, Debug)]
pub struct FaceSpec {
    pub material: FaceMaterial,
    pub image_size: Option<(u32, u32)>,
}

#[derive(Clone, Debug)]
pub struct CardFace {
    pub side: FaceSide,
    pub placement: FacePlacement,
    pub material: FaceMaterial,
    /// Pixel size the plane was fitted to, if known.
    pub image_size: Option<(u32, u32)>,
}

impl CardFace {
    pub fn aspect(&self) -> f32 {
        self.placement.size.aspect()
    }
}

#[derive(Clone, Debug)]
pub struct Card {
    pub transform: Mat4,
    layout: CardLayout,
    front: Option<CardFace>,
    back: Option<CardFace>,
}

impl Card {
    pub fn new(layout: &CardLayout, front: Option<FaceSpec>, back: Option<FaceSpec>) -> Self {
        let front_placement = layout.front_plane(front.as_ref().and_then(|f| f.image_size));
        let front_aspect = front_placement.size.aspect();
        let back = back.map(|spec| CardFace {
            side: FaceSide::Back,
            placement: layout.back_plane(spec.image_size, front_aspect),
            material: spec.material,
            image_size: spec.image_size,
        });
        let front = front.map(|spec| CardFace {
            side: FaceSide::Front,
            placement: front_placement,
            material: spec.material,
            image_size: spec.image_size,
        });
        Self {
            transform: scene_transform(),
            layout: *layout,
            front,
            back,
        }
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    /// Refit a face's plane to new artwork. A back face without its own size
    /// follows the front, so changing the front can resize both planes.
    /// Returns false when `side` has no face.
    pub fn set_image_size(&mut self, side: FaceSide, image_size: Option<(u32, u32)>) -> bool {
        let Some(face) = self.face_mut(side) else {
            return false;
        };
        face.image_size = image_size;
        self.refit();
        log::debug!("[card] {:?} image size {:?}", side, image_size);
        true
    }

    fn refit(&mut self) {
        let front_placement = self
            .layout
            .front_plane(self.front.as_ref().and_then(|f| f.image_size));
        let front_aspect = front_placement.size.aspect();
        if let Some(front) = &mut self.front {
            front.placement = front_placement;
        }
        if let Some(back) = &mut self.back {
            back.placement = self.layout.back_plane(back.image_size, front_aspect);
        }
    }

    /// Present faces, back first so the front composites over it.
    pub fn faces(&self) -> impl Iterator<Item = &CardFace> {
        self.back.iter().chain(self.front.iter())
    }

    pub fn face(&self, side: FaceSide) -> Option<&CardFace> {
        match side {
            FaceSide::Front => self.front.as_ref(),
            FaceSide::Back => self.back.as_ref(),
        }
    }

    /// Mutable access for host-side tuning, e.g. `set_edge_feather` on a masked face.
    /// Plane aspect is owned by the card and re-sent on every tick; change it
    /// with [`Card::set_image_size`].
    pub fn face_mut(&mut self, side: FaceSide) -> Option<&mut CardFace> {
        match side {
            FaceSide::Front => self.front.as_mut(),
            FaceSide::Back => self.back.as_mut(),
        }
    }

    /// Advance masked faces by one frame. Only the front face sees hover.
    pub fn tick(&mut self, dt_sec: f32, hovered: bool) {
        for face in self.front.iter_mut().chain(self.back.iter_mut()) {
            let aspect = face.aspect();
            let face_hovered = hovered && face.side == FaceSide::Front;
            if let FaceMaterial::Masked(mask) = &mut face.material {
                mask.tick(dt_sec, face_hovered, aspect);
            }
        }
    }

    /// Whether `ray` lands on the front image plane.
    pub fn front_hit(&self, ray: Ray) -> bool {
        self.front.as_ref().is_some_and(|f| {
            ray_plane_uv(ray, f.placement.model(self.transform), f.placement.size).is_some()
        })
    }
}

/// Card orientation in the demo scene.
pub fn scene_transform() -> Mat4 {
    let [x, y, z] = CARD_ROTATION;
    Mat4::from_euler(EulerRot::XYZ, x, y, z)
}
