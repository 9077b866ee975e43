pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod field;
pub mod frame;
pub mod palette;
pub mod pointer;
pub mod ripple;
pub mod surface;
pub mod transition;

pub use config::*;
pub use cursor::CursorGlow;
pub use error::ConfigError;
pub use field::{Blob, ParticleField};
pub use frame::{drive, Animation, FrameControl, ManualClock};
pub use palette::Rgba;
pub use pointer::{css_to_backing, SmoothedPointer};
pub use ripple::{lifetime_ticks, Ripple, RippleBurst, RippleOverlay};
pub use surface::{DrawOp, RecordingSurface, Surface};
pub use transition::{TransitionOverlay, TransitionPhase};
