//! Tie-breaking strategies for events sharing the top priority.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Picks one index out of `count` equally ranked candidates.
///
/// Injected into selection so shells get real randomness while tests and
/// replays stay deterministic.
pub trait TieBreak {
    /// Return an index in `0..count`. Callers guarantee `count >= 1`.
    fn pick(&mut self, count: usize) -> usize;
}

/// Uniform random tie-breaking.
#[derive(Debug)]
pub struct RandomTieBreak {
    rng: SmallRng,
}

impl RandomTieBreak {
    /// Seed from system entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seed explicitly, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomTieBreak {
    fn default() -> Self {
        Self::new()
    }
}

impl TieBreak for RandomTieBreak {
    fn pick(&mut self, count: usize) -> usize {
        self.rng.gen_range(0..count)
    }
}

/// Always picks the first candidate. Deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstWins;

impl TieBreak for FirstWins {
    fn pick(&mut self, _count: usize) -> usize {
        0
    }
}
