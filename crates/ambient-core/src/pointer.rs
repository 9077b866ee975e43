use glam::Vec2;

// `step` moves `factor` of the remaining way toward the target each frame.
#[derive(Clone, Copy, Debug)]
pub struct SmoothedPointer {
    target: Vec2,
    smoothed: Vec2,
    factor: f32,
}

impl SmoothedPointer {
    pub fn new(factor: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            smoothed: Vec2::ZERO,
            factor,
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn step(&mut self) -> Vec2 {
        self.smoothed += (self.target - self.smoothed) * self.factor;
        self.smoothed
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }
}

/// Map a pointer offset inside an element laid out at `css_size` onto a
/// backing store of `backing_size` pixels. A collapsed layout box keeps
/// the CSS offset as-is.
pub fn css_to_backing(offset_css: Vec2, css_size: Vec2, backing_size: Vec2) -> Vec2 {
    if css_size.x > 0.0 && css_size.y > 0.0 {
        offset_css / css_size * backing_size
    } else {
        offset_css
    }
}
