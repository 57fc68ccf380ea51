use glam::Vec2;

use super::constants::*;

/// Ease `a` toward `b` by blend factor `n`.
#[inline]
pub fn lerp(a: f32, b: f32, n: f32) -> f32 {
    a + (b - a) * n
}

/// Discrete visual state of the eye chain, recomputed every frame from the
/// spread metric. There is no hysteresis band, so rapid pointer movement
/// near the threshold flaps between the two states; that is the intended
/// look, not a defect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EyeState {
    Converged,
    Spread,
}

/// Ordered chain of follower positions. Link 0 eases toward the pointer,
/// each later link eases toward its predecessor, all with the same blend
/// factor. The last link is the anchor the visual container sits on.
#[derive(Clone, Debug)]
pub struct FollowerChain {
    links: [Vec2; CHAIN_LEN],
}

impl FollowerChain {
    pub fn new(origin: Vec2) -> Self {
        Self {
            links: [origin; CHAIN_LEN],
        }
    }

    /// Advance every link one frame toward its target.
    pub fn step(&mut self, pointer: Vec2) {
        let mut target = pointer;
        for link in self.links.iter_mut() {
            link.x = lerp(link.x, target.x, CHAIN_BLEND_ALPHA);
            link.y = lerp(link.y, target.y, CHAIN_BLEND_ALPHA);
            target = *link;
        }
    }

    #[inline]
    pub fn link(&self, index: usize) -> Vec2 {
        self.links[index]
    }

    /// The most-lagged link; the visual container is centered here.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.links[CHAIN_LEN - 1]
    }

    /// Spread metric against the live pointer (not a chain link): grows
    /// during fast motion, shrinks back toward 1 when the pointer rests.
    pub fn spread(&self, pointer: Vec2) -> f32 {
        let dist = pointer.distance(self.anchor());
        (1.0 + dist / SPREAD_DIST_DIVISOR).min(SPREAD_MAX)
    }

    pub fn state(&self, pointer: Vec2) -> EyeState {
        if self.spread(pointer) < SPREAD_CONVERGE_BELOW {
            EyeState::Converged
        } else {
            EyeState::Spread
        }
    }
}
