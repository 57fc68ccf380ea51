use rand::prelude::*;

use super::constants::*;

/// Color variant of a star, fixed by its slot in the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarTint {
    White,
    Dark,
    Crimson,
}

impl StarTint {
    pub fn for_index(index: usize) -> Self {
        if index % 3 == 0 {
            StarTint::White
        } else if index % 5 == 0 {
            StarTint::Dark
        } else {
            StarTint::Crimson
        }
    }
}

/// One falling star. Coordinates are screen pixels; `reset_y` is the
/// precomputed respawn height above the viewport.
#[derive(Clone, Debug)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub opacity: f32,
    pub tint: StarTint,
    pub reset_y: f32,
}

/// Fixed-size pool of falling stars. Stars are recycled, never dropped, so
/// the pool length is invariant after construction.
pub struct StarField {
    stars: Vec<Star>,
    rng: StdRng,
}

impl StarField {
    pub fn new(count: usize, viewport_w: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let w = viewport_w.max(1.0);
        let stars = (0..count)
            .map(|i| Star {
                x: rng.gen_range(0.0..w),
                y: rng.gen_range(STAR_SPAWN_Y_MIN..STAR_SPAWN_Y_MAX),
                width: rng.gen_range(STAR_WIDTH_MIN..STAR_WIDTH_MAX),
                height: rng.gen_range(STAR_HEIGHT_MIN..STAR_HEIGHT_MAX),
                speed: rng.gen_range(STAR_SPEED_MIN..STAR_SPEED_MAX),
                opacity: rng.gen_range(STAR_OPACITY_MIN..STAR_OPACITY_MAX),
                tint: StarTint::for_index(i),
                reset_y: rng.gen_range(STAR_RESET_Y_MIN..STAR_RESET_Y_MAX),
            })
            .collect();
        Self { stars, rng }
    }

    /// Advance every star one frame; stars past the bottom margin respawn
    /// at a fresh x and their precomputed height with a new speed.
    pub fn update(&mut self, viewport_w: f32, viewport_h: f32) {
        let Self { stars, rng } = self;
        for star in stars.iter_mut() {
            star.y += star.speed;
            if star.y > viewport_h + STAR_EXIT_MARGIN {
                star.x = rng.gen_range(0.0..viewport_w.max(1.0));
                star.y = star.reset_y;
                star.speed = rng.gen_range(STAR_SPEED_MIN..STAR_SPEED_MAX);
            }
        }
    }

    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}
