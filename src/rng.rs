use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::PuzzleError;

/// Seed value requesting a non-deterministic (entropy-seeded) source.
pub const RANDOM_SEED: u32 = 0;

/// Largest accepted seed; seeds are confined to `(0, 2^31 - 1]`.
pub const MAX_SEED: u32 = i32::MAX as u32;

/// Pseudo-random source for a single puzzle build.
///
/// The engine's determinism contract rests on the exact order and count of
/// calls into this trait, so every derived operation (`coin`, `shuffle`) is
/// defined in terms of `draw` and must not consume extra draws.
pub trait RandomSource {
    /// Uniform integer in `[0, max]` inclusive.
    fn draw(&mut self, max: usize) -> usize;

    fn coin(&mut self) -> bool {
        self.draw(1) == 1
    }

    /// In-place Fisher–Yates shuffle; consumes `len - 1` draws.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.draw(i);
            items.swap(i, j);
        }
    }
}

/// Production source backed by `SmallRng`.
pub struct PuzzleRng {
    inner: SmallRng,
}

impl PuzzleRng {
    pub fn from_seed(seed: u32) -> Result<Self, PuzzleError> {
        if seed == RANDOM_SEED {
            return Ok(Self {
                inner: SmallRng::from_entropy(),
            });
        }
        if seed > MAX_SEED {
            return Err(PuzzleError::InvalidSeed(seed, MAX_SEED));
        }
        Ok(Self {
            inner: SmallRng::seed_from_u64(seed as u64),
        })
    }
}

impl RandomSource for PuzzleRng {
    fn draw(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }
}

/// Counter-based source: each draw returns `counter % (max + 1)` and bumps
/// the counter by `step`. Exists to make every draw in a build predictable
/// by hand; used by the literal-scenario tests.
pub struct CounterRng {
    counter: usize,
    step: usize,
}

impl CounterRng {
    pub fn new(start: usize, step: usize) -> Self {
        Self {
            counter: start,
            step,
        }
    }
}

impl RandomSource for CounterRng {
    fn draw(&mut self, max: usize) -> usize {
        let value = self.counter % (max + 1);
        self.counter += self.step;
        value
    }
}
