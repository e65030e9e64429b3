use crate::animation::{AnimationState, Multipliers, SmoothingFactors};
use crate::config::MaskConfig;
use crate::error::ConfigError;
use crate::field::CircleField;
use crate::fragment::MaskProgram;
use crate::uniforms::{CircleUniforms, MaskUniforms};
use rand::Rng;

/// Owns the circle field, the eased animation state and the uniform blocks the
/// shading stage reads. One compositor per masked face.
#[derive(Clone, Debug)]
pub struct MaskCompositor {
    config: MaskConfig,
    field: CircleField,
    circles: CircleUniforms,
    state: AnimationState,
    uniforms: MaskUniforms,
    hovered: bool,
}

impl MaskCompositor {
    pub fn new(config: MaskConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(config: MaskConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        if config.num_circles > crate::MAX_CIRCLES {
            log::warn!(
                "[mask] requested {} circles; clamped to capacity {}",
                config.num_circles,
                crate::MAX_CIRCLES
            );
        }
        let field = CircleField::generate_with_rng(config.num_circles, &config.field, rng)?;
        Self::with_field(config, field)
    }

    /// Use a prepared field instead of sampling one; `config.num_circles` is ignored.
    pub fn with_field(config: MaskConfig, field: CircleField) -> Result<Self, ConfigError> {
        config.validate()?;
        let circles = CircleUniforms::from_field(&field);
        let uniforms = MaskUniforms {
            edge_feather: config.edge_feather,
            count: field.count() as u32,
            ..MaskUniforms::default()
        };
        log::info!(
            "[mask] field ready: circles={} feather={:.4}",
            field.count(),
            config.edge_feather
        );
        Ok(Self {
            config,
            field,
            circles,
            state: AnimationState::default(),
            uniforms,
            hovered: false,
        })
    }

    /// Advance one frame: ease toward the idle or hovered profile, accumulate
    /// orbit phase and refresh the per-frame uniforms.
    pub fn tick(&mut self, dt_sec: f32, hovered: bool, aspect: f32) {
        if hovered != self.hovered {
            log::debug!("[mask] hover {}", if hovered { "on" } else { "off" });
            self.hovered = hovered;
        }
        self.state
            .step(self.targets(hovered), self.smoothing(), dt_sec);

        let u = &mut self.uniforms;
        u.time = self.state.elapsed_time as f32;
        u.speed_mul = self.state.current.speed;
        u.size_mul = self.state.current.size;
        u.opacity_mul = self.state.current.opacity;
        u.aspect = aspect;
        u.edge_feather = self.config.edge_feather;
    }

    /// Target profile for the given hover input.
    pub fn targets(&self, hovered: bool) -> Multipliers {
        if hovered {
            Multipliers {
                speed: self.config.fast_speed_mul,
                size: self.config.hover_size_mul,
                opacity: self.config.hover_opacity_mul,
            }
        } else {
            Multipliers::IDLE
        }
    }

    pub fn smoothing(&self) -> SmoothingFactors {
        SmoothingFactors {
            speed: self.config.speed_lerp,
            size: self.config.size_lerp,
            opacity: self.config.opacity_lerp,
        }
    }

    /// Update the plane aspect (height / width) between ticks, e.g. after a resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.uniforms.aspect = aspect;
    }

    pub fn set_edge_feather(&mut self, edge_feather: f32) -> Result<(), ConfigError> {
        let config = MaskConfig {
            edge_feather,
            ..self.config
        };
        config.validate()?;
        self.config = config;
        self.uniforms.edge_feather = edge_feather;
        Ok(())
    }

    /// CPU evaluator over the current uniform state.
    pub fn program(&self) -> MaskProgram<'_> {
        MaskProgram::new(&self.circles, &self.uniforms)
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    pub fn field(&self) -> &CircleField {
        &self.field
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn uniforms(&self) -> &MaskUniforms {
        &self.uniforms
    }

    pub fn circle_uniforms(&self) -> &CircleUniforms {
        &self.circles
    }
}
