//! Drop spawning
//!
//! One drop per spawn tick: 70% water, 30% bombs, uniform horizontal position.
//! Drops may overlap each other.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{DropKind, Droplet, GameState};
use crate::consts::*;

/// Pick a drop kind from a uniform roll in [0, 1)
#[inline]
pub fn kind_for_roll(roll: f32) -> DropKind {
    if roll < WATER_CHANCE {
        DropKind::Water
    } else {
        DropKind::Bomb
    }
}

/// Seeded drop factory
#[derive(Debug, Clone)]
pub struct Spawner {
    seed: u64,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this spawner was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create one drop at the top of the surface and add it to the live set
    pub fn spawn(&mut self, state: &mut GameState) -> DropKind {
        let kind = kind_for_roll(self.rng.random::<f32>());
        let max_x = (state.surface.width - DROP_SIZE).max(0.0);
        let x = self.rng.random::<f32>() * max_x;

        let id = state.next_drop_id();
        log::debug!("Spawned {:?} drop {} at x={:.1}", kind, id, x);
        state.drops.push(Droplet::new(id, x, kind));
        kind
    }
}
