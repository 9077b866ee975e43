use crate::constants::*;
use crate::error::{positive, unit, ConfigError};
use crate::palette::Rgba;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub blob_count: usize,
    pub radius_min: f32,
    pub radius_span: f32,
    pub speed_span: f32,
    pub palette: Vec<Rgba>,
    pub pointer_smoothing: f32,
    pub attract_radius: f32,
    pub attract_strength: f32,
    pub trail_fade: Rgba,
    pub pointer_ripple_chance: f32,
    pub ripples: RippleConfig,
    pub burst: BurstConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            blob_count: BLOB_COUNT,
            radius_min: BLOB_RADIUS_MIN,
            radius_span: BLOB_RADIUS_SPAN,
            speed_span: BLOB_SPEED_SPAN,
            palette: BLOB_PALETTE.to_vec(),
            pointer_smoothing: POINTER_SMOOTHING,
            attract_radius: ATTRACT_RADIUS,
            attract_strength: ATTRACT_STRENGTH,
            trail_fade: TRAIL_FADE,
            pointer_ripple_chance: POINTER_RIPPLE_CHANCE,
            ripples: RippleConfig::default(),
            burst: BurstConfig::default(),
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.blob_count == 0 {
            return Err(ConfigError::Empty("blob_count"));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::Empty("palette"));
        }
        positive("radius_min", self.radius_min)?;
        positive("radius_span", self.radius_span)?;
        positive("speed_span", self.speed_span)?;
        positive("attract_radius", self.attract_radius)?;
        unit("pointer_smoothing", self.pointer_smoothing)?;
        unit("attract_strength", self.attract_strength)?;
        unit("pointer_ripple_chance", self.pointer_ripple_chance)?;
        self.ripples.validate()?;
        self.burst.validate()
    }

    /// Override the blob count from a raw attribute string such as `data-blob-count`.
    pub fn with_blob_count_attr(mut self, raw: &str) -> Result<Self, ConfigError> {
        let count = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::Unparsable {
                name: "blob_count",
                raw: raw.to_string(),
            })?;
        self.blob_count = count;
        self.validate()?;
        Ok(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleConfig {
    pub growth_per_tick: f32,
    pub decay_per_tick: f64,
    pub line_width: f32,
    pub stroke: Rgba,
    pub pointer_max_radius: f32,
    pub pointer_alpha: f64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            growth_per_tick: RIPPLE_GROWTH_PER_TICK,
            decay_per_tick: RIPPLE_DECAY_PER_TICK,
            line_width: RIPPLE_LINE_WIDTH,
            stroke: RIPPLE_STROKE,
            pointer_max_radius: POINTER_RIPPLE_MAX_RADIUS,
            pointer_alpha: POINTER_RIPPLE_ALPHA,
        }
    }
}

impl RippleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("ripple growth_per_tick", self.growth_per_tick)?;
        positive("ripple decay_per_tick", self.decay_per_tick)?;
        positive("ripple line_width", self.line_width)?;
        unit("ripple pointer_alpha", self.pointer_alpha)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstConfig {
    pub count: usize,
    pub stagger_ms: f64,
    pub jitter: f32,
    pub max_radius: f32,
    pub alpha: f64,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: BURST_COUNT,
            stagger_ms: BURST_STAGGER_MS,
            jitter: BURST_JITTER,
            max_radius: BURST_MAX_RADIUS,
            alpha: BURST_ALPHA,
        }
    }
}

impl BurstConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::Empty("burst count"));
        }
        if !(self.stagger_ms.is_finite() && self.stagger_ms >= 0.0) {
            return Err(ConfigError::NonPositive {
                name: "burst stagger_ms",
                value: self.stagger_ms,
            });
        }
        positive("burst max_radius", self.max_radius)?;
        unit("burst alpha", self.alpha)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionConfig {
    pub progress_step: f32,
    pub fade_step: f32,
    pub hold_ms: f64,
    pub blob_count: usize,
    pub blob_radius: f32,
    pub wobble_freq: f32,
    pub wobble_amount: f32,
    pub color: Rgba,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            progress_step: TRANSITION_PROGRESS_STEP,
            fade_step: TRANSITION_FADE_STEP,
            hold_ms: TRANSITION_HOLD_MS,
            blob_count: TRANSITION_BLOB_COUNT,
            blob_radius: TRANSITION_BLOB_RADIUS,
            wobble_freq: TRANSITION_WOBBLE_FREQ,
            wobble_amount: TRANSITION_WOBBLE_AMOUNT,
            color: TRANSITION_BLOB_COLOR,
        }
    }
}

impl TransitionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("transition progress_step", self.progress_step)?;
        positive("transition fade_step", self.fade_step)?;
        positive("transition blob_radius", self.blob_radius)?;
        if self.blob_count == 0 {
            return Err(ConfigError::Empty("transition blob_count"));
        }
        if !(self.hold_ms.is_finite() && self.hold_ms >= 0.0) {
            return Err(ConfigError::NonPositive {
                name: "transition hold_ms",
                value: self.hold_ms,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorConfig {
    pub smoothing: f32,
    pub hover_scale: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            smoothing: CURSOR_SMOOTHING,
            hover_scale: CURSOR_HOVER_SCALE,
        }
    }
}

impl CursorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit("cursor smoothing", self.smoothing)?;
        positive("cursor hover_scale", self.hover_scale)
    }
}
