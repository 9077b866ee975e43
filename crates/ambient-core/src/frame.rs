use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

pub trait Animation {
    fn frame(&mut self, now_ms: f64, surface: &mut dyn Surface) -> FrameControl;
}

#[derive(Clone, Copy, Debug)]
pub struct ManualClock {
    now_ms: f64,
    step_ms: f64,
}

impl ManualClock {
    // 60 Hz from zero
    pub fn new() -> Self {
        Self::with_step(1000.0 / 60.0)
    }

    pub fn with_step(step_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            step_ms,
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn tick(&mut self) -> f64 {
        self.now_ms += self.step_ms;
        self.now_ms
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Run up to `ticks` frames; returns how many ran before the animation stopped.
pub fn drive<A: Animation + ?Sized>(
    animation: &mut A,
    surface: &mut dyn Surface,
    clock: &mut ManualClock,
    ticks: usize,
) -> usize {
    for ran in 1..=ticks {
        let now = clock.tick();
        if animation.frame(now, surface) == FrameControl::Stop {
            return ran;
        }
    }
    ticks
}
