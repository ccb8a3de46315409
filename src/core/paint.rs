use glam::Vec2;
use std::fmt;

/// A CSS color as accepted by the canvas fill/stroke styles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    Hsla {
        hue: f32,
        saturation: f32,
        lightness: f32,
        alpha: f32,
    },
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// `saturation` and `lightness` are percentages (0..100).
    #[inline]
    pub const fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Color::Hsla {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            Color::Rgba { a, .. } => a,
            Color::Hsla { alpha, .. } => alpha,
        }
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } if a >= 1.0 => write!(f, "rgb({}, {}, {})", r, g, b),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            Color::Hsla {
                hue,
                saturation,
                lightness,
                alpha,
            } => write!(
                f,
                "hsla({}, {}%, {}%, {})",
                hue, saturation, lightness, alpha
            ),
        }
    }
}

/// How a shape is filled or a line is stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Radial gradient from the circle centre (`inner`) to its edge (`outer`).
    Radial { inner: Color, outer: Color },
    /// Linear gradient along a line, `from` at its start and `to` at its end.
    Linear { from: Color, to: Color },
}

/// Draw seam between the particle field and whatever renders it.
///
/// The browser build implements this over `CanvasRenderingContext2d`;
/// [`DisplayList`] records the calls instead.
pub trait Painter {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, paint: Paint, width: f32);
    /// Strokes a closed outline through `points` with `alpha` applied on top
    /// of the stroke color.
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32, alpha: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        paint: Paint,
        width: f32,
    },
    StrokePolygon {
        points: Vec<Vec2>,
        color: Color,
        width: f32,
        alpha: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
}

/// A `Painter` that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    pub commands: Vec<DrawCmd>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Lines whose paint is a linear gradient, i.e. particle connections.
    pub fn gradient_lines(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands.iter().filter(|c| {
            matches!(
                c,
                DrawCmd::StrokeLine {
                    paint: Paint::Linear { .. },
                    ..
                }
            )
        })
    }
}

impl Painter for DisplayList {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCmd::FillRect {
            origin,
            size,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, paint: Paint, width: f32) {
        self.commands.push(DrawCmd::StrokeLine {
            from,
            to,
            paint,
            width,
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32, alpha: f32) {
        self.commands.push(DrawCmd::StrokePolygon {
            points: points.to_vec(),
            color,
            width,
            alpha,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        self.commands.push(DrawCmd::FillCircle {
            center,
            radius,
            paint,
        });
    }
}
