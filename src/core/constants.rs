// Shared tuning constants for the pointer-chasing chain and the star field.
// Values are empirical: they describe the look of the page, not physics.

// Chain smoothing
pub const CHAIN_BLEND_ALPHA: f32 = 0.15; // per-frame blend factor for every link
pub const CHAIN_LEN: usize = 3; // fixed for the lifetime of the effect

// Spread metric: spread = min(SPREAD_MAX, 1 + dist / SPREAD_DIST_DIVISOR)
pub const SPREAD_DIST_DIVISOR: f32 = 60.0;
pub const SPREAD_MAX: f32 = 3.0;

// Below this the three eyes collapse into the single full motif.
// Strict `<`: a spread of exactly 1.2 still renders spread out.
pub const SPREAD_CONVERGE_BELOW: f32 = 1.2;

// Star pool size; constant from construction onward
pub const STAR_POOL_SIZE: usize = 60;

// Spawn ranges, screen-pixel space (negative y is above the viewport)
pub const STAR_SPAWN_Y_MIN: f32 = -100.0;
pub const STAR_SPAWN_Y_MAX: f32 = -10.0;
pub const STAR_WIDTH_MIN: f32 = 1.5;
pub const STAR_WIDTH_MAX: f32 = 3.0;
pub const STAR_HEIGHT_MIN: f32 = 40.0;
pub const STAR_HEIGHT_MAX: f32 = 80.0;
pub const STAR_SPEED_MIN: f32 = 2.0;
pub const STAR_SPEED_MAX: f32 = 4.0;
pub const STAR_OPACITY_MIN: f32 = 0.6;
pub const STAR_OPACITY_MAX: f32 = 1.0;
pub const STAR_RESET_Y_MIN: f32 = -200.0;
pub const STAR_RESET_Y_MAX: f32 = -50.0;

// A star is recycled once it falls this far past the viewport bottom
pub const STAR_EXIT_MARGIN: f32 = 100.0;

// Sections activate once their top edge scrolls within this many pixels
pub const NAV_LOOKAHEAD_PX: f64 = 100.0;
