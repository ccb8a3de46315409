// Particle field tuning constants.
//
// Ranges are half-open `[min, max)` and are sampled uniformly. Distances
// and speeds are in CSS pixels; speeds are per frame.

// Pool sizes
pub const PARTICLE_COUNT: usize = 70;
pub const ORNAMENT_COUNT: usize = 4;
pub const MAX_PARTICLES: usize = 400; // keeps the O(n^2) connection pass bounded
pub const MAX_ORNAMENTS: usize = 32;

// Particle depth and derived size: size = SIZE_NUMERATOR / z * SIZE_SCALE
pub const PARTICLE_Z_MIN: f32 = 300.0;
pub const PARTICLE_Z_MAX: f32 = 1100.0;
pub const PARTICLE_SIZE_NUMERATOR: f32 = 1000.0;
pub const PARTICLE_SIZE_SCALE: f32 = 2.5;
pub const PARTICLE_GLOW_FACTOR: f32 = 1.5;

// Particle motion
pub const PARTICLE_SPEED_Y_MIN: f32 = 0.2;
pub const PARTICLE_SPEED_Y_MAX: f32 = 0.6;
pub const PARTICLE_SPEED_X_SPAN: f32 = 0.3; // centred on zero
pub const PARTICLE_MARGIN: f32 = 20.0;

// Particle look
pub const PARTICLE_OPACITY_MIN: f32 = 0.3;
pub const PARTICLE_OPACITY_MAX: f32 = 0.9;
pub const PARTICLE_HUE_MIN: f32 = 220.0;
pub const PARTICLE_HUE_MAX: f32 = 260.0;
pub const GLOW_ALPHA_FACTOR: f32 = 0.4;
pub const HIGHLIGHT_OFFSET_FACTOR: f32 = 0.2;
pub const HIGHLIGHT_RADIUS_FACTOR: f32 = 0.4;
pub const HIGHLIGHT_ALPHA_FACTOR: f32 = 0.6;

// Pointer interaction
pub const REPULSION_RADIUS: f32 = 120.0;
pub const REPULSION_STRENGTH: f32 = 0.8; // max displacement per frame at distance 0

// Connection lines
pub const CONNECTION_THRESHOLD: f32 = 150.0;
pub const CONNECTION_MAX_OPACITY: f32 = 0.25;
pub const CONNECTION_LINE_WIDTH: f32 = 1.2;

// Ornaments (hexagon outlines)
pub const ORNAMENT_SIDES: usize = 6;
pub const ORNAMENT_SIZE_MIN: f32 = 30.0;
pub const ORNAMENT_SIZE_MAX: f32 = 90.0;
pub const ORNAMENT_DRIFT_SPAN: f32 = 0.15; // centred on zero
pub const ORNAMENT_OPACITY_MIN: f32 = 0.03;
pub const ORNAMENT_OPACITY_MAX: f32 = 0.11;
pub const ORNAMENT_ROTATION_SPEED_SPAN: f32 = 0.003; // radians per frame, centred on zero
pub const ORNAMENT_LINE_WIDTH: f32 = 1.2;
pub const ORNAMENT_STROKE_RGBA: (u8, u8, u8, f32) = (120, 140, 240, 0.5);

// Surface
pub const BACKGROUND_RGB: (u8, u8, u8) = (12, 20, 36);
pub const GRID_SPACING: f32 = 60.0;
pub const MIN_GRID_SPACING: f32 = 4.0; // bounds grid lines per frame
pub const GRID_LINE_WIDTH: f32 = 0.8;
pub const GRID_STROKE_RGBA: (u8, u8, u8, f32) = (100, 120, 230, 0.08);
