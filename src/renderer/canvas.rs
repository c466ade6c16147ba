//! `CanvasRenderingContext2d` backend

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use super::paint::Paint;
use super::shapes::{ArcShape, Path};

/// Draws onto a 2D canvas sized to the viewport
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    /// Match the backing store to the new viewport size
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn apply(&self, paint: Paint) {
        self.ctx.set_global_alpha(paint.alpha as f64);
    }

    fn arc_path(&self, arc: &ArcShape) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            arc.center.x as f64,
            arc.center.y as f64,
            arc.radius as f64,
            arc.start as f64,
            arc.end as f64,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_arc(&mut self, arc: &ArcShape, paint: Paint) {
        self.apply(paint);
        self.ctx.set_fill_style_str(&paint.color.to_css());
        self.arc_path(arc);
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }

    fn stroke_arc(&mut self, arc: &ArcShape, paint: Paint, line_width: f32) {
        self.apply(paint);
        self.ctx.set_stroke_style_str(&paint.color.to_css());
        self.ctx.set_line_width(line_width as f64);
        self.arc_path(arc);
        self.ctx.stroke();
        self.ctx.set_global_alpha(1.0);
    }

    fn fill_path(&mut self, path: &Path, paint: Paint) {
        self.apply(paint);
        self.ctx.set_fill_style_str(&paint.color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(path.start.x as f64, path.start.y as f64);
        for c in &path.curves {
            self.ctx.bezier_curve_to(
                c.c1.x as f64,
                c.c1.y as f64,
                c.c2.x as f64,
                c.c2.y as f64,
                c.end.x as f64,
                c.end.y as f64,
            );
        }
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }
}
