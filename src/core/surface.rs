use glam::Vec2;
use rand::Rng;

/// Drawing surface dimensions in CSS pixels, kept equal to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Uniform x in `[0, width)`, or 0 on a zero-width surface.
    #[inline]
    pub fn random_x<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        sample_span(rng, self.width)
    }

    /// Uniform y in `[0, height)`, or 0 on a zero-height surface.
    #[inline]
    pub fn random_y<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        sample_span(rng, self.height)
    }

    #[inline]
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(self.random_x(rng), self.random_y(rng))
    }
}

#[inline]
fn sample_span<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    if span > 0.0 {
        rng.gen_range(0.0..span)
    } else {
        0.0
    }
}

/// Uniform value in `[-span/2, span/2)`.
#[inline]
pub fn centered<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}
