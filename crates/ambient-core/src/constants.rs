use crate::palette::Rgba;

// Shared visual tuning constants for the hero canvas, transition and cursor.

// Blob field
pub const BLOB_COUNT: usize = 8;
pub const BLOB_RADIUS_MIN: f32 = 80.0;
pub const BLOB_RADIUS_SPAN: f32 = 120.0; // radius in [MIN, MIN + SPAN)
pub const BLOB_SPEED_SPAN: f32 = 0.5; // each velocity component in [-SPAN/2, SPAN/2)

pub const BLOB_PALETTE: [Rgba; 4] = [
    Rgba::new(56, 42, 35, 0.4),  // roast
    Rgba::new(44, 24, 16, 0.5),  // espresso
    Rgba::new(184, 134, 11, 0.3), // gold
    Rgba::new(139, 105, 20, 0.4), // bronze
];

// Pointer interaction
pub const POINTER_SMOOTHING: f32 = 0.05; // new = old + (target - old) * k
pub const ATTRACT_RADIUS: f32 = 200.0;
pub const ATTRACT_STRENGTH: f32 = 0.02;

// Trail fade painted over the whole surface instead of a hard clear
pub const TRAIL_FADE: Rgba = Rgba::new(10, 10, 10, 0.05);

// Ripples
pub const RIPPLE_GROWTH_PER_TICK: f32 = 2.0;
pub const RIPPLE_DECAY_PER_TICK: f64 = 0.01;
pub const RIPPLE_LINE_WIDTH: f32 = 2.0;
pub const RIPPLE_STROKE: Rgba = Rgba::new(184, 134, 11, 1.0);
pub const POINTER_RIPPLE_CHANCE: f32 = 0.1;
pub const POINTER_RIPPLE_MAX_RADIUS: f32 = 150.0;
pub const POINTER_RIPPLE_ALPHA: f64 = 0.5;

// Call-to-action ripple burst
pub const BURST_COUNT: usize = 5;
pub const BURST_STAGGER_MS: f64 = 100.0;
pub const BURST_JITTER: f32 = 100.0; // +/- around the surface centre
pub const BURST_MAX_RADIUS: f32 = 200.0;
pub const BURST_ALPHA: f64 = 0.6;

// Page transition
pub const TRANSITION_PROGRESS_STEP: f32 = 0.02;
pub const TRANSITION_FADE_STEP: f32 = 0.05;
pub const TRANSITION_HOLD_MS: f64 = 300.0;
pub const TRANSITION_BLOB_COUNT: usize = 30;
pub const TRANSITION_BLOB_RADIUS: f32 = 150.0;
pub const TRANSITION_WOBBLE_FREQ: f32 = 10.0;
pub const TRANSITION_WOBBLE_AMOUNT: f32 = 0.1;
pub const TRANSITION_BLOB_COLOR: Rgba = Rgba::new(56, 42, 35, 0.8);

// Custom cursor
pub const CURSOR_SMOOTHING: f32 = 0.15;
pub const CURSOR_HOVER_SCALE: f32 = 2.0;

// Slack for f32 transition progress against its 1.0 / 0.0 limits.
pub const STEP_EPSILON: f32 = 1e-6;
