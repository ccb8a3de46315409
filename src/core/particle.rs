use super::constants::*;
use super::paint::{Color, Paint, Painter};
use super::surface::{centered, Bounds};
use glam::Vec2;
use rand::Rng;

/// A single glowing point drifting down the field.
///
/// Fields:
/// - `position`: surface pixel coordinates
/// - `z`: depth; smaller is closer and therefore larger
/// - `size`: circle radius derived from `z`
/// - `velocity`: per-frame delta; `velocity.y` is always positive
/// - `opacity`: base alpha of the solid circle
/// - `hue`: HSL hue in degrees, kept inside the blue-purple band
/// - `glow`: radius of the radial glow halo
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub z: f32,
    pub size: f32,
    pub velocity: Vec2,
    pub opacity: f32,
    pub hue: f32,
    pub glow: f32,
}

/// Pointer push-back parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repulsion {
    pub radius: f32,
    pub strength: f32,
}

impl Default for Repulsion {
    fn default() -> Self {
        Self {
            radius: REPULSION_RADIUS,
            strength: REPULSION_STRENGTH,
        }
    }
}

impl Repulsion {
    /// Displacement applied to a particle at `at` by a pointer at `pointer`.
    ///
    /// Points away from the pointer with magnitude
    /// `strength * (radius - d) / radius`, and is exactly zero for
    /// `d >= radius`. A pointer sitting on the particle pushes toward -x.
    /// Within roughly 0.002 px of the radius the push falls below one f32
    /// ulp at viewport coordinates and leaves the position unchanged.
    pub fn displacement(&self, at: Vec2, pointer: Vec2) -> Vec2 {
        let delta = pointer - at;
        let distance = delta.length();
        if distance >= self.radius {
            return Vec2::ZERO;
        }
        let force = (self.radius - distance) / self.radius;
        let (sin, cos) = delta.y.atan2(delta.x).sin_cos();
        -Vec2::new(cos, sin) * force * self.strength
    }
}

#[inline]
pub fn size_for_depth(z: f32) -> f32 {
    PARTICLE_SIZE_NUMERATOR / z * PARTICLE_SIZE_SCALE
}

impl Particle {
    /// Build a particle with explicit motion and look; size and glow are
    /// derived from `z`.
    pub fn new(position: Vec2, z: f32, velocity: Vec2, opacity: f32, hue: f32) -> Self {
        let size = size_for_depth(z);
        Self {
            position,
            z,
            size,
            velocity,
            opacity,
            hue,
            glow: size * PARTICLE_GLOW_FACTOR,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Self {
        let position = bounds.random_point(rng);
        let z = rng.gen_range(PARTICLE_Z_MIN..PARTICLE_Z_MAX);
        let velocity = Vec2::new(
            centered(rng, PARTICLE_SPEED_X_SPAN),
            rng.gen_range(PARTICLE_SPEED_Y_MIN..PARTICLE_SPEED_Y_MAX),
        );
        let opacity = rng.gen_range(PARTICLE_OPACITY_MIN..PARTICLE_OPACITY_MAX);
        let hue = rng.gen_range(PARTICLE_HUE_MIN..PARTICLE_HUE_MAX);
        Self::new(position, z, velocity, opacity, hue)
    }

    /// One frame: drift, pointer push-back, then boundary wrap.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        pointer: Option<Vec2>,
        repulsion: &Repulsion,
        bounds: Bounds,
        rng: &mut R,
    ) {
        self.position += self.velocity;
        if let Some(p) = pointer {
            self.position += repulsion.displacement(self.position, p);
        }
        self.wrap(bounds, rng);
    }

    /// Re-enter from the top after leaving the bottom, wrap sideways, and
    /// hold at the top margin when pushed upward.
    pub fn wrap<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        let m = PARTICLE_MARGIN;
        if self.position.y > bounds.height + m {
            self.position.y = -m;
            self.position.x = bounds.random_x(rng);
        } else if self.position.y < -m {
            self.position.y = -m;
        }
        if self.position.x < -m {
            self.position.x = bounds.width + m;
        } else if self.position.x > bounds.width + m {
            self.position.x = -m;
        }
    }

    pub fn draw(&self, painter: &mut impl Painter) {
        let glow_color = Color::hsla(self.hue, 80.0, 70.0, self.opacity * GLOW_ALPHA_FACTOR);
        painter.fill_circle(
            self.position,
            self.glow,
            Paint::Radial {
                inner: glow_color,
                outer: Color::hsla(self.hue, 80.0, 70.0, 0.0),
            },
        );
        painter.fill_circle(
            self.position,
            self.size,
            Paint::Solid(Color::hsla(self.hue, 80.0, 75.0, self.opacity)),
        );
        let offset = Vec2::splat(self.size * HIGHLIGHT_OFFSET_FACTOR);
        painter.fill_circle(
            self.position - offset,
            self.size * HIGHLIGHT_RADIUS_FACTOR,
            Paint::Solid(Color::hsla(
                self.hue,
                60.0,
                85.0,
                self.opacity * HIGHLIGHT_ALPHA_FACTOR,
            )),
        );
    }
}
