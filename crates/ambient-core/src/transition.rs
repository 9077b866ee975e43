//! One-shot full-viewport dissolve: `Idle -> Running -> Holding -> Fading -> Idle`.

use crate::config::TransitionConfig;
use crate::constants::STEP_EPSILON;
use crate::error::ConfigError;
use crate::frame::{Animation, FrameControl};
use crate::surface::Surface;
use glam::Vec2;
use std::cell::RefCell;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionPhase {
    Idle,
    Running { frames: u32 },
    Holding { resume_at_ms: f64 },
    Fading { frames: u32 },
}

type Midpoint = Box<dyn FnOnce()>;

pub struct TransitionOverlay {
    config: TransitionConfig,
    phase: TransitionPhase,
    viewport: Vec2,
    progress: f32,
    on_midpoint: Option<Midpoint>,
}

impl TransitionOverlay {
    pub fn new(config: TransitionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: TransitionConfig) -> Self {
        Self {
            config,
            phase: TransitionPhase::Idle,
            viewport: Vec2::ZERO,
            progress: 0.0,
            on_midpoint: None,
        }
    }

    /// Start a dissolve over `viewport`. Returns `false` without touching any
    /// state if a transition is already in flight.
    pub fn transition(&mut self, viewport: Vec2, on_midpoint: impl FnOnce() + 'static) -> bool {
        if self.is_active() {
            log::debug!("[transition] ignored, already {:?}", self.phase);
            return false;
        }
        self.viewport = if viewport.is_finite() {
            viewport.max(Vec2::ZERO)
        } else {
            Vec2::ZERO
        };
        self.progress = 0.0;
        self.on_midpoint = Some(Box::new(on_midpoint));
        self.phase = TransitionPhase::Running { frames: 0 };
        log::debug!(
            "[transition] running on {}x{}",
            self.viewport.x,
            self.viewport.y
        );
        true
    }

    /// `transition` on a shared overlay. A cell that is already borrowed,
    /// e.g. by the frame loop running the midpoint callback, counts as busy.
    pub fn try_start(
        cell: &RefCell<Self>,
        viewport: Vec2,
        on_midpoint: impl FnOnce() + 'static,
    ) -> bool {
        match cell.try_borrow_mut() {
            Ok(mut overlay) => overlay.transition(viewport, on_midpoint),
            Err(_) => {
                log::debug!("[transition] ignored, overlay busy");
                false
            }
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    #[inline]
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn fade_alpha(&self) -> f32 {
        match self.phase {
            TransitionPhase::Fading { frames } => {
                (1.0 - frames as f32 * self.config.fade_step).max(0.0)
            }
            TransitionPhase::Idle => 0.0,
            _ => 1.0,
        }
    }

    pub fn tick(&mut self, now_ms: f64, surface: &mut dyn Surface) -> FrameControl {
        match self.phase {
            TransitionPhase::Idle => FrameControl::Stop,
            TransitionPhase::Running { frames } => {
                let frames = frames + 1;
                self.progress = frames as f32 * self.config.progress_step;
                surface.clear();
                self.paint(surface);
                if self.progress >= 1.0 - STEP_EPSILON {
                    self.phase = TransitionPhase::Holding {
                        resume_at_ms: now_ms + self.config.hold_ms,
                    };
                    log::debug!("[transition] midpoint after {} frames", frames);
                    if let Some(cb) = self.on_midpoint.take() {
                        cb();
                    }
                } else {
                    self.phase = TransitionPhase::Running { frames };
                }
                FrameControl::Continue
            }
            TransitionPhase::Holding { resume_at_ms } => {
                if now_ms < resume_at_ms {
                    return FrameControl::Continue;
                }
                self.phase = TransitionPhase::Fading { frames: 0 };
                self.fade_step(surface)
            }
            TransitionPhase::Fading { .. } => self.fade_step(surface),
        }
    }

    fn fade_step(&mut self, surface: &mut dyn Surface) -> FrameControl {
        let TransitionPhase::Fading { frames } = self.phase else {
            return FrameControl::Stop;
        };
        let frames = frames + 1;
        let alpha = 1.0 - frames as f32 * self.config.fade_step;
        if alpha <= STEP_EPSILON {
            surface.clear();
            surface.set_global_alpha(1.0);
            self.phase = TransitionPhase::Idle;
            log::debug!("[transition] faded out");
            return FrameControl::Stop;
        }
        self.phase = TransitionPhase::Fading { frames };
        surface.clear();
        surface.set_global_alpha(alpha);
        self.paint(surface);
        FrameControl::Continue
    }

    /// Ring of blobs at `half_diagonal * progress`, wobbling as it grows.
    fn paint(&self, surface: &mut dyn Surface) {
        let cfg = &self.config;
        let center = self.viewport * 0.5;
        let ring = center.length() * self.progress;
        let wobble = Vec2::new(
            1.0 + (self.progress * cfg.wobble_freq).sin() * cfg.wobble_amount,
            1.0 + (self.progress * cfg.wobble_freq).cos() * cfg.wobble_amount,
        );
        let outer = cfg.color.with_alpha(0.0);
        for i in 0..cfg.blob_count {
            let angle = i as f32 / cfg.blob_count as f32 * TAU;
            let pos = center + Vec2::new(angle.cos(), angle.sin()) * ring * wobble;
            surface.fill_radial(pos, cfg.blob_radius, cfg.color, outer);
        }
    }
}

impl Default for TransitionOverlay {
    fn default() -> Self {
        Self::from_config(TransitionConfig::default())
    }
}

impl Animation for TransitionOverlay {
    fn frame(&mut self, now_ms: f64, surface: &mut dyn Surface) -> FrameControl {
        self.tick(now_ms, surface)
    }
}
