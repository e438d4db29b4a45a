//! Problem selection for the arithmetic quiz.
//!
//! Problems are drawn uniformly with replacement, so the same problem can come
//! up several times in one session. The source is injected so tests can fix
//! the sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks the bank index of the next problem.
pub trait ProblemSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Uniform random selection backed by a seedable RNG.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seeded for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use `seed` when given, entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl ProblemSource for RandomSource {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when it runs out.
///
/// Indices are reduced modulo the bank length.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    picks: Vec<usize>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, position: 0 }
    }

    /// Number of indices handed out so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl ProblemSource for ScriptedSource {
    fn next_index(&mut self, len: usize) -> usize {
        let pick = if self.picks.is_empty() {
            0
        } else {
            self.picks[self.position % self.picks.len()]
        };
        self.position += 1;
        pick % len
    }
}
