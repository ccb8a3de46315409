pub mod config;
pub mod constants;
pub mod field;
pub mod ornament;
pub mod paint;
pub mod particle;
pub mod pointer;
pub mod scene;
pub mod surface;

pub use config::{ConfigError, FieldConfig};
pub use field::{connections, Connection, ConnectionStyle, ParticleField};
pub use ornament::Ornament;
pub use paint::{Color, DisplayList, DrawCmd, Paint, Painter};
pub use particle::{Particle, Repulsion};
pub use pointer::PointerState;
pub use scene::{InputEvent, Scene};
pub use surface::Bounds;
