use crate::core::{Color, Paint, Painter};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// `Painter` over a browser canvas 2D context.
///
/// Individual canvas call failures are dropped; a bad primitive only costs
/// that primitive for the current frame.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn gradient(&self, paint: &Paint, from: Vec2, to: Vec2, radius: f32) -> Option<web::CanvasGradient> {
        let (g, start, end) = match *paint {
            Paint::Solid(_) => return None,
            Paint::Radial { inner, outer } => {
                let (x, y) = (from.x as f64, from.y as f64);
                let g = self
                    .ctx
                    .create_radial_gradient(x, y, 0.0, x, y, radius as f64)
                    .ok()?;
                (g, inner, outer)
            }
            Paint::Linear { from: a, to: b } => {
                let g = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                (g, a, b)
            }
        };
        _ = g.add_color_stop(0.0, &start.css());
        _ = g.add_color_stop(1.0, &end.css());
        Some(g)
    }

    fn set_fill(&self, paint: &Paint, from: Vec2, to: Vec2, radius: f32) {
        match (paint, self.gradient(paint, from, to, radius)) {
            (_, Some(g)) => self.ctx.set_fill_style_canvas_gradient(&g),
            (Paint::Solid(c), None) => self.ctx.set_fill_style_str(&c.css()),
            _ => {}
        }
    }

    fn set_stroke(&self, paint: &Paint, from: Vec2, to: Vec2) {
        match (paint, self.gradient(paint, from, to, 0.0)) {
            (_, Some(g)) => self.ctx.set_stroke_style_canvas_gradient(&g),
            (Paint::Solid(c), None) => self.ctx.set_stroke_style_str(&c.css()),
            _ => {}
        }
    }
}

impl Painter for CanvasPainter {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, paint: Paint, width: f32) {
        self.set_stroke(&paint, from, to);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32, alpha: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        self.set_fill(&paint, center, center, radius);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.fill();
    }
}
