use super::config::{ConfigError, FieldConfig};
use super::constants::*;
use super::ornament::Ornament;
use super::paint::{Color, Paint, Painter};
use super::particle::{Particle, Repulsion};
use super::pointer::PointerState;
use super::surface::Bounds;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Distance-faded line styling between nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionStyle {
    pub threshold: f32,
    pub max_opacity: f32,
}

impl Default for ConnectionStyle {
    fn default() -> Self {
        Self {
            threshold: CONNECTION_THRESHOLD,
            max_opacity: CONNECTION_MAX_OPACITY,
        }
    }
}

impl ConnectionStyle {
    /// Line alpha for two particles `distance` apart, `None` at or past the
    /// threshold. Falls linearly from `max_opacity` at 0 to 0 at the threshold.
    #[inline]
    pub fn opacity(&self, distance: f32) -> Option<f32> {
        (distance < self.threshold).then(|| (1.0 - distance / self.threshold) * self.max_opacity)
    }
}

/// One line of the connection pass: indices into the particle pool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Every unordered pair closer than the style threshold, in `(i, j), i < j`
/// order.
pub fn connections<'a>(
    particles: &'a [Particle],
    style: &'a ConnectionStyle,
) -> impl Iterator<Item = Connection> + 'a {
    particles.iter().enumerate().flat_map(move |(i, p)| {
        particles[i + 1..]
            .iter()
            .enumerate()
            .filter_map(move |(k, q)| {
                let distance = p.position.distance(q.position);
                style.opacity(distance).map(|opacity| Connection {
                    a: i,
                    b: i + 1 + k,
                    opacity,
                })
            })
    })
}

/// The animated background: fixed particle and ornament pools plus the
/// pointer and surface state they react to.
///
/// Pools are allocated once in the constructor and only repositioned
/// afterwards. Resizing changes the bounds the next step wraps against and
/// nothing else.
pub struct ParticleField {
    bounds: Bounds,
    particles: Vec<Particle>,
    ornaments: Vec<Ornament>,
    pointer: PointerState,
    repulsion: Repulsion,
    connection_style: ConnectionStyle,
    grid_spacing: f32,
    rng: StdRng,
}

impl ParticleField {
    /// Validate `config` and populate both pools. `fallback_seed` is used
    /// when the config does not pin one.
    pub fn new(
        config: &FieldConfig,
        bounds: Bounds,
        fallback_seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(fallback_seed));
        let ornaments = (0..config.ornament_count)
            .map(|_| Ornament::random(&mut rng, bounds))
            .collect();
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(&mut rng, bounds))
            .collect();
        let mut field = Self::from_parts(bounds, particles, ornaments, rng);
        field.repulsion = Repulsion {
            radius: config.repulsion_radius,
            strength: config.repulsion_strength,
        };
        field.connection_style = ConnectionStyle {
            threshold: config.connection_threshold,
            max_opacity: config.connection_max_opacity,
        };
        field.grid_spacing = config.grid_spacing;
        Ok(field)
    }

    /// Assemble a field from prepared pools with default interaction
    /// parameters.
    pub fn from_parts(
        bounds: Bounds,
        particles: Vec<Particle>,
        ornaments: Vec<Ornament>,
        rng: StdRng,
    ) -> Self {
        Self {
            bounds,
            particles,
            ornaments,
            pointer: PointerState::inactive_at(bounds.center()),
            repulsion: Repulsion::default(),
            connection_style: ConnectionStyle::default(),
            grid_spacing: GRID_SPACING,
            rng,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn connection_style(&self) -> ConnectionStyle {
        self.connection_style
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.moved(x, y);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.left();
    }

    /// Advance every ornament and particle by one frame.
    pub fn update(&mut self) {
        let bounds = self.bounds;
        for o in &mut self.ornaments {
            o.step(bounds);
        }
        let pointer = self.pointer.active_position();
        for p in &mut self.particles {
            p.step(pointer, &self.repulsion, bounds, &mut self.rng);
        }
    }

    /// Paint the current state back to front: background, grid, ornaments,
    /// particles, connection lines.
    pub fn draw(&self, painter: &mut impl Painter) {
        let (r, g, b) = BACKGROUND_RGB;
        painter.fill_rect(
            Vec2::ZERO,
            Vec2::new(self.bounds.width, self.bounds.height),
            Color::rgb(r, g, b),
        );
        self.draw_grid(painter);
        for o in &self.ornaments {
            o.draw(painter);
        }
        for p in &self.particles {
            p.draw(painter);
        }
        self.draw_connections(painter);
    }

    /// `update` followed by `draw`.
    pub fn frame(&mut self, painter: &mut impl Painter) {
        self.update();
        self.draw(painter);
    }

    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        connections(&self.particles, &self.connection_style)
    }

    // Non-positive spacing disables the grid.
    fn draw_grid(&self, painter: &mut impl Painter) {
        let spacing = self.grid_spacing;
        if !(spacing > 0.0) {
            return;
        }
        let (r, g, b, a) = GRID_STROKE_RGBA;
        let paint = Paint::Solid(Color::rgba(r, g, b, a));
        let Bounds { width, height } = self.bounds;
        for x in grid_offsets(spacing, width) {
            painter.stroke_line(Vec2::new(x, 0.0), Vec2::new(x, height), paint, GRID_LINE_WIDTH);
        }
        for y in grid_offsets(spacing, height) {
            painter.stroke_line(Vec2::new(0.0, y), Vec2::new(width, y), paint, GRID_LINE_WIDTH);
        }
    }

    fn draw_connections(&self, painter: &mut impl Painter) {
        for c in self.connections() {
            let (p, q) = (&self.particles[c.a], &self.particles[c.b]);
            painter.stroke_line(
                p.position,
                q.position,
                Paint::Linear {
                    from: Color::hsla(p.hue, 80.0, 70.0, c.opacity),
                    to: Color::hsla(q.hue, 80.0, 70.0, c.opacity),
                },
                CONNECTION_LINE_WIDTH,
            );
        }
    }
}

#[inline]
fn grid_offsets(spacing: f32, extent: f32) -> impl Iterator<Item = f32> {
    (0u32..)
        .map(move |i| i as f32 * spacing)
        .take_while(move |v| *v < extent)
}
