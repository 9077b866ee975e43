use crate::config::{BurstConfig, RippleConfig};
use crate::error::ConfigError;
use crate::surface::Surface;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub origin: Vec2,
    /// Recorded at spawn; growth is not capped by it.
    pub max_radius: f32,
    pub initial_alpha: f64,
    pub radius: f32,
    pub alpha: f64,
    age: u32,
}

impl Ripple {
    pub fn new(origin: Vec2, max_radius: f32, initial_alpha: f64) -> Self {
        Self {
            origin,
            max_radius,
            initial_alpha,
            radius: 0.0,
            alpha: initial_alpha,
            age: 0,
        }
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    // Derived from the age, not accumulated, so 50 x 0.01 lands on 0.5 exactly.
    fn advance(&mut self, cfg: &RippleConfig) -> bool {
        self.age += 1;
        self.radius = self.age as f32 * cfg.growth_per_tick;
        self.alpha = alpha_at(self.initial_alpha, cfg.decay_per_tick, self.age);
        self.alpha > 0.0
    }
}

fn alpha_at(initial_alpha: f64, decay_per_tick: f64, age: u32) -> f64 {
    initial_alpha - age as f64 * decay_per_tick
}

/// Tick on which the render removes a ripple: `ceil(initial / decay)`, at least 1.
pub fn lifetime_ticks(initial_alpha: f64, decay_per_tick: f64) -> u32 {
    if decay_per_tick.is_nan() || decay_per_tick <= 0.0 {
        return u32::MAX;
    }
    let mut ticks = (initial_alpha / decay_per_tick).ceil().clamp(1.0, u32::MAX as f64) as u32;
    // Settle the float quotient against the same subtraction `advance` uses.
    while ticks > 1 && alpha_at(initial_alpha, decay_per_tick, ticks - 1) <= 0.0 {
        ticks -= 1;
    }
    while ticks < u32::MAX && alpha_at(initial_alpha, decay_per_tick, ticks) > 0.0 {
        ticks += 1;
    }
    ticks
}

#[derive(Clone, Debug)]
pub struct RippleOverlay {
    config: RippleConfig,
    active: SmallVec<[Ripple; 16]>,
}

impl RippleOverlay {
    pub fn new(config: RippleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    pub(crate) fn from_config(config: RippleConfig) -> Self {
        Self {
            config,
            active: SmallVec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    pub fn spawn(&mut self, origin: Vec2, max_radius: f32, initial_alpha: f64) {
        if !origin.is_finite() {
            return;
        }
        self.active.push(Ripple::new(origin, max_radius, initial_alpha));
    }

    /// Advance, draw and compact in one pass. Survivors keep their relative order.
    pub fn render_frame(&mut self, surface: &mut dyn Surface) {
        let cfg = self.config;
        self.active.retain(|ripple| {
            if !ripple.advance(&cfg) {
                return false;
            }
            surface.stroke_circle(
                ripple.origin,
                ripple.radius,
                cfg.stroke.with_alpha(ripple.alpha as f32),
                cfg.line_width,
            );
            true
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.active.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl Default for RippleOverlay {
    fn default() -> Self {
        Self::from_config(RippleConfig::default())
    }
}

#[derive(Clone, Debug)]
pub struct RippleBurst {
    config: BurstConfig,
    due_ms: SmallVec<[f64; 8]>,
}

impl RippleBurst {
    pub fn new(config: BurstConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    pub(crate) fn from_config(config: BurstConfig) -> Self {
        Self {
            config,
            due_ms: SmallVec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &BurstConfig {
        &self.config
    }

    pub fn queue(&mut self, now_ms: f64) {
        for i in 0..self.config.count {
            self.due_ms.push(now_ms + i as f64 * self.config.stagger_ms);
        }
    }

    /// Drop and count every spawn due at or before `now_ms`.
    pub fn release_due(&mut self, now_ms: f64) -> usize {
        let before = self.due_ms.len();
        self.due_ms.retain(|due| *due > now_ms);
        before - self.due_ms.len()
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.due_ms.len()
    }
}

impl Default for RippleBurst {
    fn default() -> Self {
        Self::from_config(BurstConfig::default())
    }
}
