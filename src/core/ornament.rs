use super::constants::*;
use super::paint::{Color, Painter};
use super::surface::{centered, Bounds};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// A large, faint hexagon outline drifting and spinning behind the particles.
#[derive(Clone, Debug, PartialEq)]
pub struct Ornament {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub opacity: f32,
}

impl Ornament {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Self {
        Self {
            position: bounds.random_point(rng),
            velocity: Vec2::new(
                centered(rng, ORNAMENT_DRIFT_SPAN),
                centered(rng, ORNAMENT_DRIFT_SPAN),
            ),
            size: rng.gen_range(ORNAMENT_SIZE_MIN..ORNAMENT_SIZE_MAX),
            rotation: rng.gen_range(0.0..TAU),
            rotation_speed: centered(rng, ORNAMENT_ROTATION_SPEED_SPAN),
            opacity: rng.gen_range(ORNAMENT_OPACITY_MIN..ORNAMENT_OPACITY_MAX),
        }
    }

    pub fn step(&mut self, bounds: Bounds) {
        self.position += self.velocity;
        self.rotation += self.rotation_speed;
        self.wrap(bounds);
    }

    /// Wrap with a margin tied to the ornament's size so a large shape is
    /// fully off-screen before it jumps to the opposite edge.
    pub fn wrap(&mut self, bounds: Bounds) {
        let s = self.size;
        if self.position.x < -s * 2.0 {
            self.position.x = bounds.width + s;
        } else if self.position.x > bounds.width + s * 2.0 {
            self.position.x = -s;
        }
        if self.position.y < -s * 2.0 {
            self.position.y = bounds.height + s;
        } else if self.position.y > bounds.height + s * 2.0 {
            self.position.y = -s;
        }
    }

    /// Hexagon corners in surface coordinates.
    pub fn vertices(&self) -> [Vec2; ORNAMENT_SIDES] {
        std::array::from_fn(|i| {
            let angle = i as f32 * TAU / ORNAMENT_SIDES as f32 + self.rotation;
            self.position + Vec2::from_angle(angle) * self.size
        })
    }

    pub fn draw(&self, painter: &mut impl Painter) {
        let (r, g, b, a) = ORNAMENT_STROKE_RGBA;
        painter.stroke_polygon(
            &self.vertices(),
            Color::rgba(r, g, b, a),
            ORNAMENT_LINE_WIDTH,
            self.opacity,
        );
    }
}
