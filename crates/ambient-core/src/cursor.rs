use crate::config::CursorConfig;
use crate::error::ConfigError;
use crate::pointer::SmoothedPointer;
use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct CursorGlow {
    pointer: SmoothedPointer,
    hover_scale: f32,
    hovering: bool,
}

impl CursorGlow {
    pub fn new(config: CursorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: CursorConfig) -> Self {
        Self {
            pointer: SmoothedPointer::new(config.smoothing),
            hover_scale: config.hover_scale,
            hovering: false,
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.set_target(Vec2::new(x, y));
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn tick(&mut self) -> Vec2 {
        self.pointer.step()
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pointer.smoothed()
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        if self.hovering {
            self.hover_scale
        } else {
            1.0
        }
    }
}

impl Default for CursorGlow {
    fn default() -> Self {
        Self::from_config(CursorConfig::default())
    }
}
