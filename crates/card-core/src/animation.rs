//! Hover-driven easing of the mask multipliers.
//!
//! The three multipliers follow their targets by plain exponential smoothing,
//! one step per rendered frame. There is no velocity term, so the ease never
//! overshoots.

use crate::constants::TIME_SCALE;

/// Speed/size/opacity multipliers applied on top of the circle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Multipliers {
    pub speed: f32,
    pub size: f32,
    pub opacity: f32,
}

impl Multipliers {
    /// Target profile while the pointer is away from the card.
    pub const IDLE: Self = Self {
        speed: 1.0,
        size: 1.0,
        opacity: 1.0,
    };
}

impl Default for Multipliers {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Fraction of the remaining gap each multiplier closes per tick, in (0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingFactors {
    pub speed: f32,
    pub size: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    pub current: Multipliers,
    /// Orbit phase in milliseconds, advanced at `current.speed` times real time.
    pub elapsed_time: f64,
}

impl AnimationState {
    pub fn step(&mut self, target: Multipliers, lerp: SmoothingFactors, dt_sec: f32) {
        let cur = &mut self.current;
        cur.speed = approach(cur.speed, target.speed, lerp.speed);
        cur.size = approach(cur.size, target.size, lerp.size);
        cur.opacity = approach(cur.opacity, target.opacity, lerp.opacity);
        self.elapsed_time += dt_sec.max(0.0) as f64 * TIME_SCALE as f64 * cur.speed as f64;
    }
}

#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}
