// Host-side tests for the star field pool.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod stars {
        include!("../src/core/stars.rs");
    }
}

use crate::core::constants::*;
use crate::core::stars::*;

const W: f32 = 1280.0;
const H: f32 = 720.0;

#[test]
fn pool_size_is_invariant() {
    let mut field = StarField::new(STAR_POOL_SIZE, W, 7);
    assert_eq!(field.stars().len(), STAR_POOL_SIZE);
    for _ in 0..1000 {
        field.update(W, H);
        assert_eq!(field.stars().len(), STAR_POOL_SIZE);
    }
}

#[test]
fn stars_spawn_within_the_configured_ranges() {
    let field = StarField::new(STAR_POOL_SIZE, W, 11);
    for star in field.stars() {
        assert!(star.x >= 0.0 && star.x <= W);
        assert!(star.y >= STAR_SPAWN_Y_MIN && star.y <= STAR_SPAWN_Y_MAX);
        assert!(star.width >= STAR_WIDTH_MIN && star.width <= STAR_WIDTH_MAX);
        assert!(star.height >= STAR_HEIGHT_MIN && star.height <= STAR_HEIGHT_MAX);
        assert!(star.speed >= STAR_SPEED_MIN && star.speed <= STAR_SPEED_MAX);
        assert!(star.opacity >= STAR_OPACITY_MIN && star.opacity <= STAR_OPACITY_MAX);
        assert!(star.reset_y >= STAR_RESET_Y_MIN && star.reset_y <= STAR_RESET_Y_MAX);
    }
}

#[test]
fn stars_recycle_above_the_top_and_never_escape() {
    let mut field = StarField::new(STAR_POOL_SIZE, W, 42);
    let mut recycled = false;
    let mut prev_ys: Vec<f32> = field.stars().iter().map(|s| s.y).collect();
    for _ in 0..2000 {
        field.update(W, H);
        for (star, prev_y) in field.stars().iter().zip(&prev_ys) {
            // No star ever falls past the exit margin or respawns below
            // the highest reset height.
            assert!(star.y <= H + STAR_EXIT_MARGIN);
            assert!(star.y >= STAR_RESET_Y_MIN);
            if star.y < *prev_y {
                recycled = true;
                assert!(star.y <= STAR_RESET_Y_MAX);
                assert!(star.x >= 0.0 && star.x <= W);
            }
        }
        prev_ys = field.stars().iter().map(|s| s.y).collect();
    }
    assert!(recycled, "no star was recycled in 2000 frames");
}

#[test]
fn recycled_speeds_stay_in_range() {
    let mut field = StarField::new(STAR_POOL_SIZE, W, 3);
    for _ in 0..2000 {
        field.update(W, H);
        for star in field.stars() {
            assert!(star.speed >= STAR_SPEED_MIN && star.speed <= STAR_SPEED_MAX);
        }
    }
}

#[test]
fn tint_follows_the_pool_index_pattern() {
    assert_eq!(StarTint::for_index(0), StarTint::White);
    assert_eq!(StarTint::for_index(3), StarTint::White);
    assert_eq!(StarTint::for_index(15), StarTint::White);
    assert_eq!(StarTint::for_index(5), StarTint::Dark);
    assert_eq!(StarTint::for_index(10), StarTint::Dark);
    assert_eq!(StarTint::for_index(1), StarTint::Crimson);
    assert_eq!(StarTint::for_index(7), StarTint::Crimson);
}

#[test]
fn same_seed_reproduces_the_same_field() {
    let a = StarField::new(STAR_POOL_SIZE, W, 9);
    let b = StarField::new(STAR_POOL_SIZE, W, 9);
    for (sa, sb) in a.stars().iter().zip(b.stars()) {
        assert_eq!(sa.x, sb.x);
        assert_eq!(sa.y, sb.y);
        assert_eq!(sa.speed, sb.speed);
    }
}
