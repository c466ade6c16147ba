//! Probabilistic per-frame spawning
//!
//! One Bernoulli trial per frame per spawn class. The expected gap between
//! spawns is geometric with mean `1 / probability` frames (50 at 0.02).
//! There is no population cap: culling keeps counts small in practice.

use rand::Rng;

use crate::consts::SPAWN_PROBABILITY;

/// A single spawn class with its per-frame probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawner {
    pub probability: f32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            probability: SPAWN_PROBABILITY,
        }
    }
}

impl Spawner {
    pub fn new(probability: f32) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }

    /// Draw one uniform sample in [0, 1); true means spawn this frame
    pub fn roll(&self, rng: &mut impl Rng) -> bool {
        rng.random::<f32>() < self.probability
    }
}
