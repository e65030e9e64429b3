use crate::config::FieldConfig;
use crate::constants::MAX_CIRCLES;
use crate::error::ConfigError;
use rand::prelude::*;
use std::f32::consts::TAU;

/// One circular aperture of the mask.
///
/// - `base_angle`: initial orbit angle in radians, 0..2π
/// - `distance`: normalized orbit radius, 0..1 (scaled per axis when shading)
/// - `size`: aperture radius in normalized plane space
/// - `speed`: signed angular velocity (radians per millisecond of phase)
/// - `opacity`: maximum reveal strength, 0..1
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CircleDescriptor {
    pub base_angle: f32,
    pub distance: f32,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
}

/// Fixed-capacity circle set. Slots past `count` are zeroed and never read.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleField {
    circles: [CircleDescriptor; MAX_CIRCLES],
    count: usize,
}

impl Default for CircleField {
    fn default() -> Self {
        Self::empty()
    }
}

impl CircleField {
    pub fn empty() -> Self {
        Self {
            circles: [CircleDescriptor::default(); MAX_CIRCLES],
            count: 0,
        }
    }

    /// Sample `count` circles (clamped to capacity) from the thread RNG.
    pub fn generate(count: usize, cfg: &FieldConfig) -> Result<Self, ConfigError> {
        Self::generate_with_rng(count, cfg, &mut rand::thread_rng())
    }

    /// Same as [`CircleField::generate`] with a caller-provided random source.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        count: usize,
        cfg: &FieldConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let n = count.min(MAX_CIRCLES);
        let mut field = Self::empty();
        for slot in field.circles.iter_mut().take(n) {
            *slot = sample_circle(cfg, rng);
        }
        field.count = n;
        Ok(field)
    }

    /// Build a field from explicit descriptors; extra entries past capacity are dropped.
    pub fn from_circles(circles: &[CircleDescriptor]) -> Self {
        let mut field = Self::empty();
        let n = circles.len().min(MAX_CIRCLES);
        field.circles[..n].copy_from_slice(&circles[..n]);
        field.count = n;
        field
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        MAX_CIRCLES
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The active circles, in slot order.
    pub fn active(&self) -> &[CircleDescriptor] {
        &self.circles[..self.count]
    }

    pub fn get(&self, index: usize) -> Option<&CircleDescriptor> {
        self.active().get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CircleDescriptor> {
        self.active().iter()
    }
}

fn sample_circle<R: Rng + ?Sized>(cfg: &FieldConfig, rng: &mut R) -> CircleDescriptor {
    let t = rng.gen::<f32>().powf(cfg.distance_exponent);
    let distance = lerp(cfg.min_distance_ratio, cfg.max_distance_ratio, t)
        .clamp(cfg.min_distance_ratio, cfg.max_distance_ratio);
    // Larger apertures near the center draw focus inward
    let size = lerp(cfg.min_size, cfg.max_size, 1.0 - distance).clamp(cfg.min_size, cfg.max_size);
    CircleDescriptor {
        base_angle: rng.gen_range(0.0..TAU),
        distance,
        size,
        speed: lerp(cfg.slow_speed_min, cfg.slow_speed_max, rng.gen::<f32>()),
        opacity: lerp(cfg.min_opacity, cfg.max_opacity, rng.gen::<f32>())
            .clamp(cfg.min_opacity, cfg.max_opacity),
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
