//! RNG module - seeded point-winner generation
//!
//! Hosts that do not take point winners from a person or a replay log use a
//! [`PointPicker`] to toss a fair coin for every point. The generator is a
//! simple LCG so the same seed always plays out the same game, which keeps
//! demos and tests reproducible.

use crate::types::Player;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state is a valid LCG state, but 0 is also what an unset seed
        // usually looks like; map it so "no seed" and "seed 1" agree.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Fair coin from the high bit. The low bits of an LCG with a power-of-two
    /// modulus alternate, so they must not be used here.
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }
}

/// Chooses who wins the next point.
#[derive(Debug, Clone)]
pub struct PointPicker {
    rng: SimpleRng,
    seed: u32,
}

impl PointPicker {
    /// Create a picker with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Winner of the next point.
    pub fn pick(&mut self) -> Player {
        Self::player_for(self.rng.next_bool())
    }

    /// Seed this picker was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    fn player_for(heads: bool) -> Player {
        if heads {
            Player::PlayerOne
        } else {
            Player::PlayerTwo
        }
    }
}

impl Default for PointPicker {
    fn default() -> Self {
        Self::new(1)
    }
}
