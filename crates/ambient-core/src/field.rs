use crate::config::FieldConfig;
use crate::error::ConfigError;
use crate::frame::{Animation, FrameControl};
use crate::palette::Rgba;
use crate::pointer::SmoothedPointer;
use crate::ripple::{RippleBurst, RippleOverlay};
use crate::surface::Surface;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

pub struct ParticleField {
    config: FieldConfig,
    bounds: Vec2,
    blobs: Vec<Blob>,
    pointer: SmoothedPointer,
    ripples: RippleOverlay,
    burst: RippleBurst,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, rng))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_parts(FieldConfig::default(), StdRng::seed_from_u64(seed))
    }

    fn from_parts(config: FieldConfig, rng: StdRng) -> Self {
        Self {
            pointer: SmoothedPointer::new(config.pointer_smoothing),
            ripples: RippleOverlay::from_config(config.ripples),
            burst: RippleBurst::from_config(config.burst),
            bounds: Vec2::ZERO,
            blobs: Vec::with_capacity(config.blob_count),
            config,
            rng,
        }
    }

    /// (Re)create every blob inside a `width` x `height` surface.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.bounds = sanitize_extent(width, height);
        let cfg = &self.config;
        let rng = &mut self.rng;
        let bounds = self.bounds;
        self.blobs = (0..cfg.blob_count)
            .map(|_| Blob {
                position: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
                radius: cfg.radius_min + rng.gen::<f32>() * cfg.radius_span,
                velocity: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * cfg.speed_span,
                    (rng.gen::<f32>() - 0.5) * cfg.speed_span,
                ),
                color: *cfg.palette.choose(&mut *rng).unwrap_or(&Rgba::TRANSPARENT),
            })
            .collect();
        log::debug!(
            "[field] initialized {} blobs on {}x{}",
            self.blobs.len(),
            bounds.x,
            bounds.y
        );
    }

    // Blobs are kept and pulled back in bounds on the next frame.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = sanitize_extent(width, height);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let raw = Vec2::new(x, y);
        if !raw.is_finite() {
            return;
        }
        let target = raw.clamp(Vec2::ZERO, self.bounds);
        self.pointer.set_target(target);
        if self.rng.gen::<f32>() < self.config.pointer_ripple_chance {
            let rc = *self.ripples.config();
            self.ripples.spawn(target, rc.pointer_max_radius, rc.pointer_alpha);
        }
    }

    pub fn spawn_ripple(&mut self, x: f32, y: f32, max_radius: f32, initial_alpha: f64) {
        self.ripples.spawn(Vec2::new(x, y), max_radius, initial_alpha);
    }

    pub fn queue_burst(&mut self, now_ms: f64) {
        self.burst.queue(now_ms);
    }

    fn release_burst(&mut self, now_ms: f64) {
        let due = self.burst.release_due(now_ms);
        if due == 0 {
            return;
        }
        let bc = *self.burst.config();
        let center = self.bounds * 0.5;
        for _ in 0..due {
            let jitter = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * 2.0 * bc.jitter,
                (self.rng.gen::<f32>() - 0.5) * 2.0 * bc.jitter,
            );
            self.ripples.spawn(center + jitter, bc.max_radius, bc.alpha);
        }
    }

    pub fn render_frame(&mut self, surface: &mut dyn Surface) {
        let pointer = self.pointer.step();
        surface.fill_rect(Vec2::ZERO, self.bounds, self.config.trail_fade);

        let bounds = self.bounds;
        let reach = self.config.attract_radius;
        let strength = self.config.attract_strength;
        for blob in &mut self.blobs {
            blob.position += blob.velocity;

            let offset = pointer - blob.position;
            let dist = offset.length();
            if dist < reach {
                let force = (reach - dist) / reach;
                blob.position += offset * force * strength;
            }

            if blob.position.x < 0.0 || blob.position.x > bounds.x {
                blob.velocity.x = -blob.velocity.x;
            }
            if blob.position.y < 0.0 || blob.position.y > bounds.y {
                blob.velocity.y = -blob.velocity.y;
            }
            blob.position = blob.position.clamp(Vec2::ZERO, bounds);

            surface.fill_radial(blob.position, blob.radius, blob.color, Rgba::TRANSPARENT);
        }

        self.ripples.render_frame(surface);
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn ripples(&self) -> &RippleOverlay {
        &self.ripples
    }

    pub fn pointer(&self) -> &SmoothedPointer {
        &self.pointer
    }

    pub fn pending_burst(&self) -> usize {
        self.burst.pending()
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }
}

impl Animation for ParticleField {
    fn frame(&mut self, now_ms: f64, surface: &mut dyn Surface) -> FrameControl {
        self.release_burst(now_ms);
        self.render_frame(surface);
        FrameControl::Continue
    }
}

fn sanitize_extent(width: f32, height: f32) -> Vec2 {
    let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Vec2::new(clean(width), clean(height))
}
