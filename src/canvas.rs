use ambient_core::{Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] over a 2D canvas context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }

    fn circle(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let s = self.size();
        self.ctx.clear_rect(0.0, 0.0, s.x as f64, s.y as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, extent: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            origin.x as f64,
            origin.y as f64,
            extent.x as f64,
            extent.y as f64,
        );
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        let (x, y) = (center.x as f64, center.y as f64);
        let Ok(gradient) = self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, radius.max(0.0) as f64)
        else {
            return;
        };
        _ = gradient.add_color_stop(0.0, &inner.to_css());
        _ = gradient.add_color_stop(1.0, &outer.to_css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.circle(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(line_width as f64);
        self.circle(center, radius);
        self.ctx.stroke();
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }
}
