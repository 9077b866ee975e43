//! Page hooks and DOM-side timings.
//!
//! Animation tuning lives in `ambient_core::constants`; this module only
//! names the elements the front-end attaches to.

// Hero canvas carrying the blob field
pub const HERO_CANVAS_SELECTOR: &str = ".liquid-canvas";
pub const ATTR_BLOB_COUNT: &str = "data-blob-count";
pub const ATTR_SEED: &str = "data-seed";

// Call-to-action buttons: hover bursts, click transitions
pub const CTA_SELECTOR: &str = ".cta-button";
pub const CTA_CLASS: &str = "cta-button";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";

// Page transition canvas
pub const TRANSITION_CANVAS_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; \
     height: 100%; z-index: 9998; pointer-events: none;";

// Custom cursor
pub const CURSOR_CLASS: &str = "cursor-glow";
pub const CURSOR_INTERACTIVE_SELECTOR: &str = "a, button, .menu-card, .product-card";

// Loading screen
pub const LOADING_SELECTOR: &str = ".loading-screen";
pub const LOADING_HIDE_DELAY_MS: i32 = 2000;
pub const HIDDEN_CLASS: &str = "hidden";
