//! Drawing seam: a canvas context in the browser, [`RecordingSurface`] in tests.

use crate::palette::Rgba;
use glam::Vec2;

pub trait Surface {
    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn fill_rect(&mut self, origin: Vec2, extent: Vec2, color: Rgba);
    /// Filled disc shaded from `inner` at the centre to `outer` at `radius`.
    fn fill_radial(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, line_width: f32);
    fn set_global_alpha(&mut self, alpha: f32);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    FillRect {
        origin: Vec2,
        extent: Vec2,
        color: Rgba,
    },
    FillRadial {
        center: Vec2,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        line_width: f32,
    },
    GlobalAlpha(f32),
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub extent: Vec2,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            extent: Vec2::new(width, height),
            ops: Vec::new(),
        }
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn radial_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRadial { .. }))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeCircle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.extent
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, origin: Vec2, extent: Vec2, color: Rgba) {
        self.ops.push(DrawOp::FillRect {
            origin,
            extent,
            color,
        });
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        self.ops.push(DrawOp::FillRadial {
            center,
            radius,
            inner,
            outer,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, line_width: f32) {
        self.ops.push(DrawOp::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ops.push(DrawOp::GlobalAlpha(alpha));
    }
}
