use crate::error::ImageError;
use glam::{Vec2, Vec4};

/// Anything the CPU evaluator can sample by texture coordinate.
pub trait TextureSource {
    fn sample(&self, uv: Vec2) -> Vec4;
}

/// A constant color samples the same everywhere.
impl TextureSource for Vec4 {
    fn sample(&self, _uv: Vec2) -> Vec4 {
        *self
    }
}

/// Decoded RGBA8 image, row-major, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgba {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageRgba {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::Empty { width, height });
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(ImageError::TooLarge { width, height })?;
        if pixels.len() != expected {
            return Err(ImageError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Procedural artwork used in place of a loaded photo: a warm vertical
    /// gradient with soft concentric bands around the upper third.
    pub fn demo_pattern(width: u32, height: u32) -> Self {
        let (w, h) = (width.max(1), height.max(1));
        let mut pixels = Vec::with_capacity(w as usize * h as usize * 4);
        let focus = Vec2::new(0.5, 0.36);
        let scale = Vec2::new(1.0, h as f32 / w as f32);
        for y in 0..h {
            for x in 0..w {
                let uv = Vec2::new(
                    (x as f32 + 0.5) / w as f32,
                    (y as f32 + 0.5) / h as f32,
                );
                let r = ((uv - focus) * scale).length();
                let band = 0.5 + 0.5 * (r * 38.0).cos();
                let glow = (1.0 - r * 1.6).clamp(0.0, 1.0);
                let top = Vec4::new(0.98, 0.62, 0.30, 1.0);
                let bottom = Vec4::new(0.18, 0.10, 0.32, 1.0);
                let base = bottom.lerp(top, 1.0 - uv.y);
                let c = base + Vec4::new(0.25, 0.18, 0.10, 0.0) * glow * (0.6 + 0.4 * band);
                let c = c.clamp(Vec4::ZERO, Vec4::ONE);
                pixels.extend_from_slice(&[
                    (c.x * 255.0).round() as u8,
                    (c.y * 255.0).round() as u8,
                    (c.z * 255.0).round() as u8,
                    255,
                ]);
            }
        }
        Self {
            width: w,
            height: h,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Height over width, the convention used by the mask.
    pub fn aspect(&self) -> f32 {
        self.height as f32 / self.width as f32
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y.min(self.height - 1) as usize * self.width as usize
            + x.min(self.width - 1) as usize)
            * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }
}

/// Nearest-texel lookup with clamp-to-edge addressing.
impl TextureSource for ImageRgba {
    fn sample(&self, uv: Vec2) -> Vec4 {
        let uv = uv.clamp(Vec2::ZERO, Vec2::ONE);
        let x = (uv.x * self.width as f32) as u32;
        let y = (uv.y * self.height as f32) as u32;
        let [r, g, b, a] = self.pixel(x, y);
        Vec4::new(r as f32, g as f32, b as f32, a as f32) / 255.0
    }
}
