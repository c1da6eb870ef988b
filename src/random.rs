//! Random index generation for secret combinations.
//!
//! The board never touches a random number generator directly; it draws pin
//! ordinals through [`IndexSource`], so games can be replayed from a seed and
//! tests can script the secret.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed indices.
pub trait IndexSource {
    /// Draw an index in `[0, bound)`. `bound` is always positive.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl IndexSource for StdRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// A cryptographically secure generator seeded from the operating system.
pub fn secure_source() -> StdRng {
    StdRng::from_os_rng()
}

/// A reproducible generator for replaying a game.
pub fn seeded_source(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
