//! Core domain: shared simulation configuration and rng resources.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Simulation-wide configuration resolved at boot.
#[derive(Resource, Debug)]
pub struct SimConfig {
    pub seed: u64,
    /// Whether the character spawned by bootstrap is owned by this
    /// participant. A dedicated observer would set this false and rely on
    /// replication to populate the world.
    pub local_authority: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            local_authority: true,
        }
    }
}

/// Seeded rng for cosmetic rolls (footstep clip picks). Deterministic under a
/// fixed seed so cue sequences are reproducible in tests.
#[derive(Resource, Debug)]
pub struct CueRng(pub ChaCha8Rng);

impl Default for CueRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(0))
    }
}

impl CueRng {
    pub fn reseed(&mut self, seed: u64) {
        self.0 = ChaCha8Rng::seed_from_u64(seed);
    }
}
