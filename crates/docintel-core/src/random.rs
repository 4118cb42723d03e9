//! Injectable randomness for mock replies and references.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of the random choices the mock capabilities make.
///
/// Injected into responders so tests can pin the sequence with a seed.
pub trait RandomSource: Send + Sync {
    /// Returns an index uniformly drawn from `0..len`. `len` must be non-zero.
    fn index(&self, len: usize) -> usize;

    /// Returns a float uniformly drawn from `[0, 1)`.
    fn unit(&self) -> f64;
}

/// `RandomSource` backed by a `StdRng`.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seeded when `seed` is present, entropy-seeded otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut rng)
    }
}

impl RandomSource for SeededRandom {
    fn index(&self, len: usize) -> usize {
        self.with_rng(|rng| rng.gen_range(0..len))
    }

    fn unit(&self) -> f64 {
        self.with_rng(|rng| rng.gen_range(0.0..1.0))
    }
}
