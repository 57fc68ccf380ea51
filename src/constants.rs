/// DOM-side tuning constants.
///
/// Pure-logic tuning (chain blend factor, spread thresholds, star spawn
/// ranges) lives in `core::constants`; everything here only matters once
/// elements are being styled and timers scheduled.
// The eye container is 120px square; its center sits on the chain anchor
pub const EYE_CONTAINER_HALF_PX: f32 = 60.0;

// Trailing eyes render slightly smaller than the converged motif
pub const EYE_SPREAD_SCALE: f32 = 0.9;

// Star trail rendering
pub const STAR_SHADOW_BLUR: f64 = 8.0;
pub const STAR_TRAIL_FADE: &str = "rgba(255, 34, 34, 0.1)";

// Scroll highlighting is debounced to one recomputation per quiet period
pub const NAV_SCROLL_DEBOUNCE_MS: i32 = 100;

// Contact form timers
pub const FORM_CONFIRM_RESTORE_MS: i32 = 5000;
pub const FORM_ERROR_DISMISS_MS: i32 = 4000;
