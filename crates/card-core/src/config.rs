use crate::error::ConfigError;

/// Distribution shaping for the circle field.
///
/// Fields:
/// - `min_size`/`max_size`: circle radius range in normalized plane space.
///   Circles near the center get sizes toward `max_size`.
/// - `min_opacity`/`max_opacity`: per-circle reveal strength range, within 0..1
/// - `slow_speed_min`/`slow_speed_max`: angular speed range (radians per
///   millisecond of orbit phase). The bounds may be given in either order;
///   the default spans both rotation directions.
/// - `min_distance_ratio`/`max_distance_ratio`: radial distance range, within 0..1
/// - `distance_exponent`: shapes `t^exponent` before mapping into the distance
///   range; below 1 pushes samples toward `max_distance_ratio`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub min_size: f32,
    pub max_size: f32,
    pub min_opacity: f32,
    pub max_opacity: f32,
    pub slow_speed_min: f32,
    pub slow_speed_max: f32,
    pub min_distance_ratio: f32,
    pub max_distance_ratio: f32,
    pub distance_exponent: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            min_size: 0.02,
            max_size: 0.08,
            min_opacity: 0.2,
            max_opacity: 0.8,
            slow_speed_min: 0.0001,
            slow_speed_max: -0.0001,
            min_distance_ratio: 0.01,
            max_distance_ratio: 0.7,
            distance_exponent: 0.7,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ordered_range("size", self.min_size, self.max_size)?;
        if self.min_size <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "min_size",
                value: self.min_size,
            });
        }
        unit_range("opacity", self.min_opacity, self.max_opacity)?;
        unit_range(
            "distance_ratio",
            self.min_distance_ratio,
            self.max_distance_ratio,
        )?;
        finite("slow_speed_min", self.slow_speed_min)?;
        finite("slow_speed_max", self.slow_speed_max)?;
        finite("distance_exponent", self.distance_exponent)?;
        if self.distance_exponent <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "distance_exponent",
                value: self.distance_exponent,
            });
        }
        Ok(())
    }
}

/// Full configuration table for a masked image face.
///
/// `num_circles` is clamped to `MAX_CIRCLES` when the field is generated.
/// The hover multipliers are the targets the animation eases toward while the
/// pointer is over the card; the `*_lerp` factors set how fast each one
/// follows (fraction of the remaining gap closed per tick).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskConfig {
    pub num_circles: usize,
    pub field: FieldConfig,
    pub fast_speed_mul: f32,
    pub hover_size_mul: f32,
    pub hover_opacity_mul: f32,
    pub speed_lerp: f32,
    pub size_lerp: f32,
    pub opacity_lerp: f32,
    pub edge_feather: f32,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            num_circles: 80,
            field: FieldConfig::default(),
            fast_speed_mul: 5.5,
            hover_size_mul: 2.5,
            hover_opacity_mul: 1.1,
            speed_lerp: 0.05,
            size_lerp: 0.05,
            opacity_lerp: 0.05,
            edge_feather: 0.008,
        }
    }
}

impl MaskConfig {
    /// Tuning used by the demo scene: wider size/opacity spread and a slower
    /// speed ease.
    pub fn showcase() -> Self {
        Self {
            num_circles: 80,
            field: FieldConfig {
                min_size: 0.01,
                max_size: 0.10,
                min_opacity: 0.01,
                max_opacity: 1.0,
                min_distance_ratio: 0.05,
                max_distance_ratio: 0.85,
                distance_exponent: 0.7,
                ..FieldConfig::default()
            },
            speed_lerp: 0.025,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.field.validate()?;
        non_negative("fast_speed_mul", self.fast_speed_mul)?;
        non_negative("hover_size_mul", self.hover_size_mul)?;
        non_negative("hover_opacity_mul", self.hover_opacity_mul)?;
        smoothing("speed_lerp", self.speed_lerp)?;
        smoothing("size_lerp", self.size_lerp)?;
        smoothing("opacity_lerp", self.opacity_lerp)?;
        non_negative("edge_feather", self.edge_feather)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

fn smoothing(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::SmoothingFactor { field, value })
    }
}

fn ordered_range(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    finite(field, min)?;
    finite(field, max)?;
    if min > max {
        return Err(ConfigError::InvertedRange { field, min, max });
    }
    Ok(())
}

fn unit_range(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    ordered_range(field, min, max)?;
    for value in [min, max] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::OutOfRange {
                field,
                value,
                lo: 0.0,
                hi: 1.0,
            });
        }
    }
    Ok(())
}
