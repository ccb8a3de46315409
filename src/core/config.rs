use super::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("particle_count {0} exceeds the maximum of {max}", max = MAX_PARTICLES)]
    TooManyParticles(usize),
    #[error("ornament_count {0} exceeds the maximum of {max}", max = MAX_ORNAMENTS)]
    TooManyOrnaments(usize),
    #[error("repulsion_radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("connection_threshold must be positive, got {0}")]
    NonPositiveThreshold(f32),
    #[error("repulsion_strength must be finite and non-negative, got {0}")]
    InvalidRepulsionStrength(f32),
    #[error("connection_max_opacity must lie in [0, 1], got {0}")]
    OpacityOutOfRange(f32),
    #[error("grid_spacing must be at least {min} or non-positive to disable, got {0}", min = MIN_GRID_SPACING)]
    GridSpacingTooSmall(f32),
}

/// Runtime parameters for a particle field.
///
/// Defaults come from [`super::constants`]. `seed` fixes the RNG for
/// reproducible layouts; `None` lets the host pick one.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub ornament_count: usize,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub connection_threshold: f32,
    pub connection_max_opacity: f32,
    pub grid_spacing: f32,
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            ornament_count: ORNAMENT_COUNT,
            repulsion_radius: REPULSION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            connection_threshold: CONNECTION_THRESHOLD,
            connection_max_opacity: CONNECTION_MAX_OPACITY,
            grid_spacing: GRID_SPACING,
            seed: None,
        }
    }
}

impl FieldConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count > MAX_PARTICLES {
            return Err(ConfigError::TooManyParticles(self.particle_count));
        }
        if self.ornament_count > MAX_ORNAMENTS {
            return Err(ConfigError::TooManyOrnaments(self.ornament_count));
        }
        if !(self.repulsion_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(self.repulsion_radius));
        }
        if !(self.connection_threshold > 0.0) {
            return Err(ConfigError::NonPositiveThreshold(self.connection_threshold));
        }
        if !(self.repulsion_strength.is_finite() && self.repulsion_strength >= 0.0) {
            return Err(ConfigError::InvalidRepulsionStrength(self.repulsion_strength));
        }
        if !(0.0..=1.0).contains(&self.connection_max_opacity) {
            return Err(ConfigError::OpacityOutOfRange(self.connection_max_opacity));
        }
        // Non-positive spacing turns the grid off; anything else bounds the line count.
        let spacing = self.grid_spacing;
        if !spacing.is_finite() || (spacing > 0.0 && spacing < MIN_GRID_SPACING) {
            return Err(ConfigError::GridSpacingTooSmall(spacing));
        }
        Ok(())
    }
}
