// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn blend_and_spread_tuning_is_sane() {
    // A blend factor outside (0, 1) would stall or overshoot the chain
    assert!(CHAIN_BLEND_ALPHA > 0.0 && CHAIN_BLEND_ALPHA < 1.0);
    assert!(CHAIN_LEN >= 1);

    // The converge threshold must sit inside the metric's [1, max] range
    assert!(SPREAD_CONVERGE_BELOW > 1.0);
    assert!(SPREAD_CONVERGE_BELOW < SPREAD_MAX);
    assert!(SPREAD_DIST_DIVISOR > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn star_ranges_are_ordered_and_above_the_viewport() {
    assert!(STAR_POOL_SIZE > 0);
    assert!(STAR_SPAWN_Y_MIN < STAR_SPAWN_Y_MAX);
    assert!(STAR_SPAWN_Y_MAX < 0.0);
    assert!(STAR_RESET_Y_MIN < STAR_RESET_Y_MAX);
    assert!(STAR_RESET_Y_MAX < 0.0);
    assert!(STAR_WIDTH_MIN < STAR_WIDTH_MAX);
    assert!(STAR_HEIGHT_MIN < STAR_HEIGHT_MAX);
    assert!(STAR_SPEED_MIN < STAR_SPEED_MAX);
    assert!(STAR_SPEED_MIN > 0.0);
    assert!(STAR_OPACITY_MIN < STAR_OPACITY_MAX);
    assert!(STAR_OPACITY_MAX <= 1.0);
    assert!(STAR_EXIT_MARGIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn dom_side_tuning_is_sane() {
    assert!(EYE_CONTAINER_HALF_PX > 0.0);
    assert!(EYE_SPREAD_SCALE > 0.0 && EYE_SPREAD_SCALE <= 1.0);
    assert!(STAR_SHADOW_BLUR >= 0.0);
    assert!(NAV_SCROLL_DEBOUNCE_MS > 0);
    assert!(NAV_LOOKAHEAD_PX > 0.0);
    assert!(FORM_CONFIRM_RESTORE_MS > 0);
    assert!(FORM_ERROR_DISMISS_MS > 0);
}
